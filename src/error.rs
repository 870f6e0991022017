//! Error types for pulsegen

use thiserror::Error;

/// Errors that can occur while generating or persisting samples
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid configuration for {key}: {message}")]
    Config { key: &'static str, message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
