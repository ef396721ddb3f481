use std::path::{Path, PathBuf};

use tracing::info;

use crate::patch::{
    backup_file, patch_script, FixError, PatchOutcome, DIST_DIR, ENTRY_SCRIPT, EXTENSION_PREFIX,
};
use crate::utils::dir_scan::find_latest_extension;
use crate::utils::platform::Platform;

/// A step of the fix reached, with the path it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    ExtensionsDir(&'a Path),
    ExtensionFound(&'a Path),
    BackedUp(&'a Path),
    Patching(&'a Path),
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub extension_dir: PathBuf,
    pub script: PathBuf,
    pub backup: PathBuf,
    pub outcome: PatchOutcome,
}

/// Fix the Copilot Chat extension installed for the current user.
pub fn run_on_host<F>(on_progress: Option<F>) -> Result<FixReport, FixError>
where
    F: FnMut(Progress<'_>),
{
    let platform = Platform::current()?;
    let home = dirs::home_dir().ok_or(FixError::HomeNotFound)?;
    run(platform, &home, on_progress)
}

/// Fix the Copilot Chat extension under `home`.
///
/// Workflow:
/// 1. Resolve the extensions directory for the platform
/// 2. Select the most recently modified Copilot Chat extension
/// 3. Back up `dist/extension.js`
/// 4. Strip the header and write the script back if it changed
///
/// A missing header is reported through `PatchOutcome::PatternNotFound`;
/// everything else that goes wrong is a `FixError`.
pub fn run<F>(platform: Platform, home: &Path, mut on_progress: Option<F>) -> Result<FixReport, FixError>
where
    F: FnMut(Progress<'_>),
{
    let mut report = |progress: Progress<'_>| {
        if let Some(ref mut callback) = on_progress {
            callback(progress);
        }
    };

    let extensions_dir = platform.extensions_dir(home);
    report(Progress::ExtensionsDir(&extensions_dir));

    let extension_dir = find_latest_extension(&extensions_dir, EXTENSION_PREFIX)?;
    report(Progress::ExtensionFound(&extension_dir));

    let script = extension_dir.join(DIST_DIR).join(ENTRY_SCRIPT);
    if !script.is_file() {
        return Err(FixError::ScriptNotFound(script));
    }

    // The script is only rewritten once this has succeeded
    let backup = backup_file(&script)?;
    report(Progress::BackedUp(&backup));

    report(Progress::Patching(&script));
    let outcome = patch_script(&script)?;
    info!(%platform, extension = %extension_dir.display(), ?outcome, "fix finished");

    Ok(FixReport {
        extension_dir,
        script,
        backup,
        outcome,
    })
}
