// crates/core/src/bump.rs
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Which component of a dotted version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpLevel {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpLevel {
    /// Zero-based component index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
            Self::Patch => 2,
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        })
    }
}

impl FromStr for BumpLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            other => Err(format!("unknown bump level '{other}' (expected major, minor or patch)")),
        }
    }
}

/// Compute the version that follows `version` at `level`.
///
/// Components are padded with zeros up to patch, the selected component is
/// incremented and every component after it is reset to zero. Components
/// past patch are kept, so `1.2.3.4` bumped at patch gives `1.2.4.0`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidVersion`] if a component is empty, not made of
/// ASCII digits, or would overflow.
pub fn bump_version(version: &str, level: BumpLevel) -> Result<String> {
    let mut parts = parse_components(version)?;
    if parts.len() < 3 {
        parts.resize(3, 0);
    }

    let idx = level.index();
    parts[idx] = parts[idx]
        .checked_add(1)
        .ok_or_else(|| CoreError::invalid(version, format!("{level} component overflows")))?;
    for part in &mut parts[idx + 1..] {
        *part = 0;
    }

    let next = parts.iter().map(u64::to_string).collect::<Vec<_>>().join(".");
    log::debug!("bumped {version} ({level}) -> {next}");
    Ok(next)
}

fn parse_components(version: &str) -> Result<Vec<u64>> {
    version
        .split('.')
        .map(|part| {
            if part.is_empty() {
                return Err(CoreError::invalid(version, "empty component"));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CoreError::invalid(version, format!("component '{part}' is not numeric")));
            }
            part.parse::<u64>()
                .map_err(|e| CoreError::invalid(version, format!("component '{part}': {e}")))
        })
        .collect()
}
