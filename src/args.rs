// src/args.rs
use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "jversion",
    version = crate::VERSION,
    about = "Read, set and bump the `String VERSION = \"...\";` field of a Java source file"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print the rewritten file to stdout instead of writing it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the version declared in FILE
    Get {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Replace the declared version in FILE with VERSION
    Set {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// New version, inserted as given
        version: String,

        /// Fail when FILE has no version declaration
        #[arg(long)]
        strict: bool,
    },

    /// Increment the declared version in FILE and print the result
    Bump {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Component to increment
        #[arg(long, value_enum, default_value = "patch")]
        level: LevelArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Major,
    Minor,
    Patch,
}

impl From<LevelArg> for jversion_core::BumpLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Major => Self::Major,
            LevelArg::Minor => Self::Minor,
            LevelArg::Patch => Self::Patch,
        }
    }
}
