//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
///
/// Startup failures propagate to `main` and terminate the process; no
/// recovery is attempted.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
