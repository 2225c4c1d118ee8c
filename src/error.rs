use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for snapq
#[derive(Debug, Error)]
pub enum SnapqError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error(
        "Missing required setting `{0}`.\n\nSet it in the [service] section of config.toml or pass the matching command-line flag."
    )]
    MissingSetting(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
