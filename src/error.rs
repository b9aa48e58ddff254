//! Errors that abort a run before any suite executes.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while preparing or launching a run.
///
/// Test failures are never reported through this type; they only show up as
/// the failure count of a [`RunSummary`](crate::models::RunSummary).
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("cannot read suite directory '{}': {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("suite '{}' is already registered", .0.display())]
    DuplicateSuite(PathBuf),

    #[error("unknown reporter '{name}' (available: {available})")]
    UnknownReporter { name: String, available: String },

    #[error("invalid configuration '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("execution engine failed: {0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;
