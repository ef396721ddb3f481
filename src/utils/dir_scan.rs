use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::patch::FixError;

/// A directory whose name matched a prefix, with its modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// List subdirectories of `dir` whose names start with `prefix`.
/// Symlinks are followed. A missing `dir` yields an empty list.
/// Order is whatever the filesystem enumerates.
pub fn list_matching_dirs(dir: &Path, prefix: &str) -> io::Result<Vec<Candidate>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }

        let path = entry.path();
        let metadata = fs::metadata(&path)?;
        if !metadata.is_dir() {
            continue;
        }
        candidates.push(Candidate {
            path,
            modified: metadata.modified()?,
        });
    }

    Ok(candidates)
}

/// Pick the most recently modified candidate. Ties keep the earliest one.
pub fn newest(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.modified <= current.modified => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Find the newest extension directory in `dir` named `<prefix><version>`.
pub fn find_latest_extension(dir: &Path, prefix: &str) -> Result<PathBuf, FixError> {
    let candidates = list_matching_dirs(dir, prefix).map_err(|e| FixError::ScanFailed {
        dir: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    for candidate in &candidates {
        debug!(path = %candidate.path.display(), modified = ?candidate.modified, "candidate extension");
    }

    newest(&candidates)
        .map(|candidate| candidate.path.clone())
        .ok_or_else(|| FixError::ExtensionNotFound {
            search_dir: dir.to_path_buf(),
        })
}
