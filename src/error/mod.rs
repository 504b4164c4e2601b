//! Error types for host inspection and CLI validation
//!
//! Name classification and rewriting are total over any string input and
//! never produce errors. This enum covers the boundaries that do fail:
//! reading host configuration and validating CLI arguments.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NamesError>;

#[derive(Debug, Error)]
pub enum NamesError {
    /// File IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// storage.conf parse errors
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}
