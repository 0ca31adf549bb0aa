//! Shared Error Types
//!
//! Field validation errors raised by the per-endpoint request schemas before
//! any store call is made.
//!
//! # Usage
//!
//! ```rust
//! use postboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("content", "content cannot be empty");
//! assert_eq!(error.field(), Some("content"));
//! ```
use thiserror::Error;

/// Validation failures that are safe to report back to the caller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A single field failed validation
    #[error("{field}: {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The request as a whole is unusable (e.g. no field to update)
    #[error("{message}")]
    InvalidRequest {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error for one field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an error that is not tied to a single field
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Name of the offending field, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::InvalidRequest { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("username", "username is required");
        match &error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "username");
                assert_eq!(message, "username is required");
            }
            _ => panic!("Expected ValidationError"),
        }
        assert_eq!(error.to_string(), "username: username is required");
    }

    #[test]
    fn test_invalid_request_has_no_field() {
        let error = SharedError::invalid_request("no info to update");
        assert_eq!(error.field(), None);
        assert_eq!(error.to_string(), "no info to update");
    }
}
