// crates/core/src/locator.rs
use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CoreError, Result};

const DECLARATION_PATTERN: &str = r#"String VERSION = "(?P<version>[0-9.]+)";"#;

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DECLARATION_PATTERN).expect("declaration pattern is a valid regex"))
}

/// The first `String VERSION = "...";` found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Captured value between the quotes.
    pub version: String,
    /// Byte range of the whole declaration, `String` through `;`.
    pub span: Range<usize>,
}

/// Locate the first version declaration in `contents`.
pub fn find_declaration(contents: &str) -> Option<Declaration> {
    let caps = declaration_regex().captures(contents)?;
    let whole = caps.get(0)?;
    let version = caps.name("version")?;
    Some(Declaration {
        version: version.as_str().to_string(),
        span: whole.range(),
    })
}

/// Read the version out of `contents`.
///
/// # Errors
///
/// Returns [`CoreError::VersionNotFound`] when no declaration is present.
pub fn read_version(contents: &str) -> Result<String> {
    let decl = find_declaration(contents).ok_or(CoreError::VersionNotFound)?;
    log::debug!("found version {} at bytes {:?}", decl.version, decl.span);
    Ok(decl.version)
}

/// Replace the first declaration's value with `version`.
///
/// `version` is inserted verbatim. Without a declaration the input comes
/// back unchanged; see [`write_version_strict`] for the failing variant.
pub fn write_version(contents: &str, version: &str) -> String {
    match find_declaration(contents) {
        Some(decl) => splice(contents, &decl.span, version),
        None => {
            log::debug!("no version declaration, contents left as-is");
            contents.to_string()
        }
    }
}

/// Like [`write_version`], but a missing declaration is an error.
///
/// # Errors
///
/// Returns [`CoreError::VersionNotFound`] when no declaration is present.
pub fn write_version_strict(contents: &str, version: &str) -> Result<String> {
    let decl = find_declaration(contents).ok_or(CoreError::VersionNotFound)?;
    Ok(splice(contents, &decl.span, version))
}

fn splice(contents: &str, span: &Range<usize>, version: &str) -> String {
    let replacement = format!("String VERSION = \"{version}\";");
    let mut out = String::with_capacity(contents.len() - span.len() + replacement.len());
    out.push_str(&contents[..span.start]);
    out.push_str(&replacement);
    out.push_str(&contents[span.end..]);
    out
}
