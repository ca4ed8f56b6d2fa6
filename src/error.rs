//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror`. Validation
//! failures live in [`crate::domain::ValidationError`] because they are
//! user-facing outcomes rather than faults.

use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that can occur while running the HTTP server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Could not bind the listening socket
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    /// Configuration was invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServerError
pub type ServerResult<T> = Result<T, ServerError>;
