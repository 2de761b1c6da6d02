// crates/core/src/error.rs
use thiserror::Error;

/// Errors raised by the version locator and the bump logic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("`String VERSION = \"...\";` declaration not found in the given content")]
    VersionNotFound,

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub(crate) fn invalid(version: &str, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}
