//! Mapping of domain and request errors to HTTP responses.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use validator::ValidationErrors;

use si_core::errors::DomainError;
use si_shared::types::response::{error_codes, ErrorResponse};

/// Error returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rule violation or lookup failure raised by a service
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body failed field validation
    #[error("Request validation failed: {0}")]
    InvalidFields(#[from] ValidationErrors),

    /// Body, query or path could not be deserialized
    #[error("Malformed request: {0}")]
    Malformed(String),

    /// Missing or unusable request metadata, such as the caller header
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Domain(DomainError::NotFound { .. }) => error_codes::NOT_FOUND,
            ApiError::Domain(DomainError::Validation { .. }) => error_codes::VALIDATION_ERROR,
            ApiError::Domain(DomainError::AccessDenied { .. }) => error_codes::FORBIDDEN,
            ApiError::Domain(DomainError::Conflict { .. }) => error_codes::CONFLICT,
            ApiError::Domain(DomainError::Internal { .. }) => error_codes::INTERNAL_ERROR,
            ApiError::InvalidFields(_) | ApiError::Malformed(_) => error_codes::VALIDATION_ERROR,
            ApiError::BadRequest(_) => error_codes::BAD_REQUEST,
        }
    }

    /// Client-facing message; internal details stay in the log
    fn public_message(&self) -> String {
        match self {
            ApiError::Domain(DomainError::NotFound { message, .. })
            | ApiError::Domain(DomainError::Validation { message })
            | ApiError::Domain(DomainError::AccessDenied { message })
            | ApiError::Domain(DomainError::Conflict { message }) => message.clone(),
            ApiError::Domain(DomainError::Internal { .. }) => String::from("An internal error occurred"),
            ApiError::InvalidFields(_) => String::from("Request validation failed"),
            ApiError::Malformed(message) | ApiError::BadRequest(message) => message.clone(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::AccessDenied { .. }) => StatusCode::FORBIDDEN,
            ApiError::Domain(DomainError::Conflict { .. }) => StatusCode::CONFLICT,
            ApiError::Domain(DomainError::Internal { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Domain(DomainError::Validation { .. })
            | ApiError::InvalidFields(_)
            | ApiError::Malformed(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::warn!("Request rejected: {}", self);
        }

        let mut body = ErrorResponse::new(self.code(), self.public_message());
        if let ApiError::InvalidFields(errors) = self {
            for (field, failures) in errors.field_errors() {
                let messages: Vec<String> = failures
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                body = body.add_detail(field, messages);
            }
        }

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_domain_error_status_mapping() {
        let cases = [
            (DomainError::not_found("Item", 1), StatusCode::NOT_FOUND),
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::access_denied("no"), StatusCode::FORBIDDEN),
            (DomainError::conflict("dup"), StatusCode::CONFLICT),
            (DomainError::internal("db"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            let api_error = ApiError::from(error);
            assert_eq!(api_error.status_code(), status);
            assert_eq!(api_error.error_response().status(), status);
        }
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let error = ApiError::from(DomainError::internal("connection refused on 10.0.0.5"));
        assert_eq!(error.public_message(), "An internal error occurred");
        assert_eq!(error.code(), error_codes::INTERNAL_ERROR);
    }

    #[test]
    fn test_field_errors_are_validation_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("email"));

        let error = ApiError::from(errors);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), error_codes::VALIDATION_ERROR);
        assert_eq!(ApiError::BadRequest("x".into()).code(), error_codes::BAD_REQUEST);
    }
}
