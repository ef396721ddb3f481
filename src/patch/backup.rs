//! Backup of the bundled script before it is modified.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tracing::debug;

use crate::patch::constants::BACKUP_SUFFIX;
use crate::patch::FixError;
use crate::utils::hash::hash_file;

/// Path of the backup copy for `target`: the same path with `.backup` appended.
pub fn backup_path_for(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy `target` next to itself with the backup suffix.
///
/// Permissions and access/modification times are carried over. An existing
/// backup is overwritten. The copy is hashed against the original before
/// returning, so a returned path always holds the exact pre-patch bytes.
pub fn backup_file(target: &Path) -> Result<PathBuf, FixError> {
    let backup = backup_path_for(target);
    let failed = |reason: String| FixError::BackupFailed {
        file: target.to_path_buf(),
        reason,
    };

    fs::copy(target, &backup).map_err(|e| failed(e.to_string()))?;

    let metadata = fs::metadata(target).map_err(|e| failed(e.to_string()))?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(&backup, atime, mtime).map_err(|e| failed(e.to_string()))?;

    let expected = hash_file(target).map_err(|e| failed(e.to_string()))?;
    let actual = hash_file(&backup).map_err(|e| failed(e.to_string()))?;
    if expected != actual {
        return Err(failed(format!(
            "backup hash {} does not match original {}",
            actual, expected
        )));
    }

    debug!(backup = %backup.display(), hash = %actual, "backup written");
    Ok(backup)
}
