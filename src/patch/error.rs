use std::fmt;
use std::path::PathBuf;

/// Fatal errors that stop a fix run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixError {
    /// Host operating system is not one we know the extensions layout for
    UnsupportedPlatform(String),
    /// No home directory could be determined
    HomeNotFound,
    /// No Copilot Chat extension directory under the search directory
    ExtensionNotFound { search_dir: PathBuf },
    /// Listing the extensions directory failed
    ScanFailed { dir: PathBuf, reason: String },
    /// Extension directory has no bundled script
    ScriptNotFound(PathBuf),
    /// Copying or verifying the backup failed
    BackupFailed { file: PathBuf, reason: String },
    /// Reading the bundled script failed
    ReadFailed { file: PathBuf, reason: String },
    /// Writing the patched script failed
    WriteFailed { file: PathBuf, reason: String },
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixError::UnsupportedPlatform(name) => {
                write!(f, "unsupported operating system: {}", name)
            }
            FixError::HomeNotFound => {
                write!(f, "could not determine the home directory")
            }
            FixError::ExtensionNotFound { search_dir } => {
                write!(
                    f,
                    "GitHub Copilot Chat extension not found in '{}'; make sure it is installed",
                    search_dir.display()
                )
            }
            FixError::ScanFailed { dir, reason } => {
                write!(f, "failed to list '{}': {}", dir.display(), reason)
            }
            FixError::ScriptNotFound(path) => {
                write!(f, "extension.js not found: '{}'", path.display())
            }
            FixError::BackupFailed { file, reason } => {
                write!(f, "backup failed for '{}': {}", file.display(), reason)
            }
            FixError::ReadFailed { file, reason } => {
                write!(f, "failed to read '{}': {}", file.display(), reason)
            }
            FixError::WriteFailed { file, reason } => {
                write!(f, "failed to write '{}': {}", file.display(), reason)
            }
        }
    }
}

impl std::error::Error for FixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_names_the_platform() {
        let err = FixError::UnsupportedPlatform("freebsd".to_string());
        assert_eq!(err.to_string(), "unsupported operating system: freebsd");
    }

    #[test]
    fn io_failures_name_the_file() {
        let err = FixError::WriteFailed {
            file: PathBuf::from("/tmp/extension.js"),
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write '/tmp/extension.js': disk full");
    }
}
