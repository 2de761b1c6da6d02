// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use jversion_core::{bump_version, read_version, write_version, write_version_strict};

use crate::config::{Action, Config};
use crate::filesystem;

/// Execute `config` against its file, writing user-facing output to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let contents = filesystem::read_contents(&config.file)?;

    let updated = match &config.action {
        Action::Get => {
            let version = read_version(&contents)
                .with_context(|| format!("reading version from '{}'", config.file.display()))?;
            writeln!(out, "{version}")?;
            return Ok(());
        }
        Action::Set { version, strict } => {
            if *strict {
                write_version_strict(&contents, version)
                    .with_context(|| format!("setting version in '{}'", config.file.display()))?
            } else {
                let updated = write_version(&contents, version);
                if updated == contents && read_version(&contents).is_err() {
                    log::warn!("no version declaration in '{}', nothing to set", config.file.display());
                }
                updated
            }
        }
        Action::Bump { level } => {
            let current = read_version(&contents)
                .with_context(|| format!("reading version from '{}'", config.file.display()))?;
            let next = bump_version(&current, *level)?;
            log::info!("{current} -> {next}");
            if !config.dry_run {
                writeln!(out, "{next}")?;
            }
            write_version(&contents, &next)
        }
    };

    if config.dry_run {
        out.write_all(updated.as_bytes())?;
        return Ok(());
    }

    if updated == contents {
        log::debug!("'{}' already up to date", config.file.display());
    } else {
        filesystem::write_contents(&config.file, &updated)?;
        log::debug!("rewrote '{}'", config.file.display());
    }
    Ok(())
}
