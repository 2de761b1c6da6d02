// src/config.rs
use crate::args::{Args, Command};
use jversion_core::BumpLevel;
use log::LevelFilter;
use std::path::PathBuf;

/// What to do with the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Get,
    Set { version: String, strict: bool },
    Bump { level: BumpLevel },
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub action: Action,
    pub dry_run: bool,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let log_level = if args.quiet {
            LevelFilter::Error
        } else {
            match args.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        let (file, action) = match args.command {
            Command::Get { file } => (file, Action::Get),
            Command::Set { file, version, strict } => (file, Action::Set { version, strict }),
            Command::Bump { file, level } => (file, Action::Bump { level: level.into() }),
        };

        Self {
            file,
            action,
            dry_run: args.dry_run,
            log_level,
        }
    }
}
