//! Unified error types and result handling.
//!
//! All fallible operations in the crate return [`Result`], built on a single
//! [`Error`] enum. User-facing validation failures are distinguished from
//! infrastructure failures so the terminal layer can render the former as a
//! blocking message without aborting the session.

use thiserror::Error;

/// Unified error type for all operations in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// User input rejected before any state change
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the rejected input
        message: String,
    },

    /// A money amount was negative or not a finite number
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },

    /// Database error from the underlying `SeaORM` connection
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The item collection could not be serialized for persistence
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error from the terminal or filesystem
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
