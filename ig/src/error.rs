//! Generation error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Cannot list template directory {dir}")]
    DirectoryAccess {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read seed template {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write generated file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),
}
