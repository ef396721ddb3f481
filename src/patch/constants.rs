/// Directory under the home directory holding VS Code state
pub const VSCODE_DIR: &str = ".vscode";
/// Directory under `VSCODE_DIR` holding installed extensions
pub const EXTENSIONS_DIR: &str = "extensions";
/// Name prefix of Copilot Chat extension directories, followed by a version
pub const EXTENSION_PREFIX: &str = "github.copilot-chat-";
/// Directory within the extension holding the bundled script
pub const DIST_DIR: &str = "dist";
/// Filename of the bundled script
pub const ENTRY_SCRIPT: &str = "extension.js";
/// Suffix appended to the script path for the backup copy
pub const BACKUP_SUFFIX: &str = ".backup";
/// Header construction removed from the bundled script
pub const HEADER_PATTERN: &str =
    r#""x-onbehalf-extension-id"\s*:\s*`?\$\{A\}/\$\{c\}`?\s*,?"#;
/// Write-up describing the manual edit, shown when the pattern is missing
pub const MANUAL_FIX_URL: &str = "https://blog.csdn.net/eieihihi/article/details/146296925";
