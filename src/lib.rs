//! opsrun: applies declarative find/replace jobs to a working tree.
//!
//! This crate provides the job file loader, the file resolver and the
//! replacement logic behind the `run-ops` CLI.

pub mod application;
pub mod commands;
pub mod constants;
pub mod error;
pub mod file_util;
pub mod job;
pub mod logging;
pub mod path_util;
pub mod resolver;
pub mod sysexits;

pub use error::Error;

/// Unified result type for all fallible operations in opsrun.
pub type Result<T> = std::result::Result<T, Error>;
