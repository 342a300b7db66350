//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required integer field was absent
    #[error("Missing integer field: {field}")]
    MissingInteger { field: &'static str },

    /// An integer field could not be parsed
    #[error("Invalid integer for {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}
