//! Custom error types for wattage-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for wattage-cli operations
#[derive(Error, Debug)]
pub enum WattageError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (registry file, billing file)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WattageError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for WattageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WattageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for wattage-cli operations
pub type WattageResult<T> = Result<T, WattageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WattageError::Validation("power must be positive".into());
        assert_eq!(err.to_string(), "Validation error: power must be positive");
    }

    #[test]
    fn test_is_validation() {
        assert!(WattageError::Validation("x".into()).is_validation());
        assert!(!WattageError::Storage("x".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WattageError = io_err.into();
        assert!(matches!(err, WattageError::Io(_)));
    }
}
