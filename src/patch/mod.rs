pub mod backup;
mod constants;
mod error;
pub mod header;

// Re-export public items
pub use backup::{backup_file, backup_path_for};
pub use constants::{
    BACKUP_SUFFIX, DIST_DIR, ENTRY_SCRIPT, EXTENSION_PREFIX, EXTENSIONS_DIR, HEADER_PATTERN,
    MANUAL_FIX_URL, VSCODE_DIR,
};
pub use error::FixError;
pub use header::{patch_script, strip_extension_header, PatchOutcome};
