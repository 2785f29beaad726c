//! Domain error types.
//!
//! Errors are raised where a rule is violated and travel unchanged up to the
//! HTTP boundary, which maps each variant to a status code.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Referenced user, item, booking or comment does not exist
    #[error("{resource} not found: {message}")]
    NotFound { resource: String, message: String },

    /// Input breaks a business rule
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Caller is not allowed to act on the resource
    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    /// Write would break a uniqueness constraint
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Storage or other unexpected failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(resource: &str, id: i64) -> Self {
        DomainError::NotFound {
            resource: resource.to_string(),
            message: format!("{} with id={} does not exist", resource, id),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation { message: message.into() }
    }

    pub fn access_denied(message: impl Into<String>) -> Self {
        DomainError::AccessDenied { message: message.into() }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal { message: message.into() }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = DomainError::not_found("Booking", 42);
        assert_eq!(error.to_string(), "Booking not found: Booking with id=42 does not exist");
        assert!(matches!(error, DomainError::NotFound { ref resource, .. } if resource == "Booking"));
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(DomainError::validation("x"), DomainError::Validation { .. }));
        assert!(matches!(DomainError::access_denied("x"), DomainError::AccessDenied { .. }));
        assert!(matches!(DomainError::conflict("x"), DomainError::Conflict { .. }));
        assert_eq!(DomainError::internal("db down").to_string(), "Internal error: db down");
    }
}
