#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod version;

pub use version::VERSION;
