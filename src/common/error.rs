//! Error types for the harness
//!
//! Every failure is reported as a single diagnostic line and an exit code;
//! nothing here is ever allowed to surface as a panic.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Target Errors ===
    #[error("No program found to test. Expected {searched}")]
    TargetNotFound { searched: String },

    #[error("Program timed out after {0} seconds")]
    Timeout(u64),

    #[error("Failed to run program: {0}")]
    Execution(String),

    // === Expectation Errors ===
    #[error("Expected output file '{path}' not found")]
    ExpectedNotFound { path: String },

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a target-not-found error listing the candidate paths
    pub fn target_not_found<S: AsRef<str>>(candidates: &[S]) -> Self {
        Self::TargetNotFound {
            searched: candidates
                .iter()
                .map(|s| format!("'{}'", s.as_ref()))
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
