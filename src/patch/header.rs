//! Removal of the `x-onbehalf-extension-id` header from the bundled script.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::patch::constants::HEADER_PATTERN;
use crate::patch::FixError;

/// Result of patching the script. `PatternNotFound` is not an error: the
/// script was already patched or its minified names changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched { removed: usize },
    PatternNotFound,
}

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"))
}

/// Delete every header construction from `content` in a single pass.
///
/// Returns the resulting text along with how many fragments were removed.
/// Text without a match comes back borrowed and untouched.
pub fn strip_extension_header(content: &str) -> (Cow<'_, str>, usize) {
    let re = header_regex();
    let removed = re.find_iter(content).count();
    (re.replace_all(content, ""), removed)
}

/// Patch the script at `script` in place.
///
/// The file is only written when stripping changed its content. Callers
/// must have backed the script up first.
pub fn patch_script(script: &Path) -> Result<PatchOutcome, FixError> {
    let content = fs::read_to_string(script).map_err(|e| FixError::ReadFailed {
        file: script.to_path_buf(),
        reason: e.to_string(),
    })?;

    let (stripped, removed) = strip_extension_header(&content);
    if stripped.as_ref() == content {
        warn!(script = %script.display(), "header pattern not found");
        return Ok(PatchOutcome::PatternNotFound);
    }

    fs::write(script, stripped.as_bytes()).map_err(|e| FixError::WriteFailed {
        file: script.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(
        removed,
        before = content.len(),
        after = stripped.len(),
        "script rewritten"
    );
    Ok(PatchOutcome::Patched { removed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn removes_plain_interpolation() {
        let input = r#"var x = {"x-onbehalf-extension-id": ${A}/${c}, "other": 1};"#;
        let (output, removed) = strip_extension_header(input);
        assert_eq!(output, r#"var x = { "other": 1};"#);
        assert_eq!(removed, 1);
    }

    #[test]
    fn removes_template_literal() {
        let input = r#"headers:{"x-onbehalf-extension-id":`${A}/${c}`,"X-Request-Id":r}"#;
        let (output, _) = strip_extension_header(input);
        assert_eq!(output, r#"headers:{"X-Request-Id":r}"#);
    }

    #[test]
    fn tolerates_whitespace_around_colon_and_missing_comma() {
        let input = "{a:1,\"x-onbehalf-extension-id\"  :\n  `${A}/${c}`  }";
        let (output, _) = strip_extension_header(input);
        assert_eq!(output, "{a:1,}");
    }

    #[test]
    fn leaves_surrounding_bytes_untouched() {
        let prefix = "/* ünïcode */ let h = {\n  ";
        let suffix = "\n  \"Content-Type\": \"json\"\n};\n";
        let input = format!("{}\"x-onbehalf-extension-id\": `${{A}}/${{c}}`,{}", prefix, suffix);
        let (output, _) = strip_extension_header(&input);
        assert_eq!(output, format!("{}{}", prefix, suffix));
    }

    #[test]
    fn removes_every_occurrence() {
        let input = r#"{"x-onbehalf-extension-id": ${A}/${c},a}{"x-onbehalf-extension-id": ${A}/${c},b}"#;
        let (output, removed) = strip_extension_header(input);
        assert_eq!(output, "{a}{b}");
        assert_eq!(removed, 2);
    }

    #[test]
    fn other_variable_names_do_not_match() {
        let input = r#"{"x-onbehalf-extension-id": `${B}/${d}`}"#;
        let (output, removed) = strip_extension_header(input);
        assert!(matches!(output, Cow::Borrowed(_)));
        assert_eq!(removed, 0);
    }

    #[test]
    fn patch_script_rewrites_file() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("extension.js");
        fs::write(&script, r#"var x = {"x-onbehalf-extension-id": ${A}/${c}, "other": 1};"#).unwrap();

        let outcome = patch_script(&script).unwrap();

        assert_eq!(outcome, PatchOutcome::Patched { removed: 1 });
        assert_eq!(fs::read_to_string(&script).unwrap(), r#"var x = { "other": 1};"#);
    }

    #[test]
    fn patch_script_without_match_leaves_file_alone() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("extension.js");
        fs::write(&script, b"var x = {\"other\": 1};").unwrap();
        let mtime = filetime::FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&script, mtime).unwrap();

        let outcome = patch_script(&script).unwrap();

        assert_eq!(outcome, PatchOutcome::PatternNotFound);
        assert_eq!(fs::read(&script).unwrap(), b"var x = {\"other\": 1};");
        let metadata = fs::metadata(&script).unwrap();
        assert_eq!(filetime::FileTime::from_last_modification_time(&metadata), mtime);
    }

    #[test]
    fn patch_script_rejects_non_utf8() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("extension.js");
        fs::write(&script, [0xff, 0xfe, 0x00]).unwrap();

        let result = patch_script(&script);
        assert!(matches!(result, Err(FixError::ReadFailed { .. })));
    }
}
