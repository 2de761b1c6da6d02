#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Pure text operations on a `String VERSION = "x.y.z";` declaration.
//!
//! Nothing in this crate touches the filesystem: callers hand over the full
//! contents of a file and get a version or new contents back.

pub mod bump;
pub mod error;
pub mod locator;

pub use bump::{BumpLevel, bump_version};
pub use error::{CoreError, Result};
pub use locator::{Declaration, find_declaration, read_version, write_version, write_version_strict};
