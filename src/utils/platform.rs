//! Host platform identification and the extensions directory for each.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::patch::{FixError, EXTENSIONS_DIR, VSCODE_DIR};

/// Operating systems with a known VS Code extensions layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

/// All recognized platforms.
pub const ALL_PLATFORMS: &[Platform] = &[Platform::Windows, Platform::MacOs, Platform::Linux];

impl Platform {
    /// Parse an operating system name such as `std::env::consts::OS`.
    pub fn parse(name: &str) -> Result<Platform, FixError> {
        match name.to_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "macos" | "darwin" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            _ => Err(FixError::UnsupportedPlatform(name.to_string())),
        }
    }

    /// The platform this binary is running on.
    pub fn current() -> Result<Platform, FixError> {
        Platform::parse(std::env::consts::OS)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Base directory holding installed extensions. Not checked for existence.
    pub fn extensions_dir(&self, home: &Path) -> PathBuf {
        match self {
            Platform::Windows | Platform::MacOs | Platform::Linux => {
                home.join(VSCODE_DIR).join(EXTENSIONS_DIR)
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
