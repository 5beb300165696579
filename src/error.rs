// src/error.rs
// Error types for the outer surfaces (server, CLI, config)

use thiserror::Error;

/// Main error type for the crate.
///
/// The reply engine itself is total and never produces one of these; they
/// come from the HTTP server, the terminal chat and configuration checks.
#[derive(Error, Debug)]
pub enum TherapyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Result using TherapyError
pub type Result<T> = std::result::Result<T, TherapyError>;
