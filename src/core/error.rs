//! Typed error handling for the orders service
//!
//! Service operations return [`OrderError`] so callers can tell a rejected
//! input apart from a store failure without inspecting messages.
//!
//! # Error Categories
//!
//! - [`OrderError::InvalidInput`]: the caller sent something the service refuses
//! - [`OrderError::NotFound`]: a query succeeded but matched nothing (HTTP boundary only)
//! - [`OrderError::Internal`]: the store failed; wraps a [`StorageError`]
//!
//! # Example
//!
//! ```rust,ignore
//! match service.create_order(order).await {
//!     Ok(created) => println!("stored order {}", created.id),
//!     Err(OrderError::InvalidInput { message }) => eprintln!("rejected: {}", message),
//!     Err(e) => eprintln!("failed: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Message returned to callers for every internal failure
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing your request.";

/// The main error type for order operations
#[derive(Debug, Error)]
pub enum OrderError {
    /// Caller-supplied data failed validation
    #[error("{message}")]
    InvalidInput { message: String },

    /// The query ran but returned no records
    ///
    /// Only the HTTP layer produces this; the service reports empty results as `Ok(vec![])`.
    #[error("{message}")]
    NotFound { message: String },

    /// The store failed while serving the request
    #[error("Internal failure: {0}")]
    Internal(#[from] StorageError),
}

/// Errors raised by order store backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding the table was poisoned by a panicking writer
    #[error("Failed to acquire {message}")]
    LockPoisoned { message: String },

    /// An order with the same id is already stored
    #[error("An order with id '{id}' already exists")]
    DuplicateKey { id: i32 },

    /// No id is left above the highest stored id
    #[error("No order ids left to assign")]
    IdsExhausted,

    /// The backend cannot serve requests
    #[error("Order store is unavailable: {message}")]
    Unavailable { message: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl OrderError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        OrderError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        OrderError::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::InvalidInput { .. } => "INVALID_INPUT",
            OrderError::NotFound { .. } => "NOT_FOUND",
            OrderError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    ///
    /// Internal failures never expose the underlying storage error.
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            OrderError::InvalidInput { message } | OrderError::NotFound { message } => {
                message.clone()
            }
            OrderError::Internal(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        };

        ErrorResponse {
            code: self.error_code().to_string(),
            message,
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// A specialized Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            OrderError::invalid_input("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            OrderError::not_found("none").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            OrderError::from(StorageError::DuplicateKey { id: 1 }).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_response_hides_detail() {
        let err = OrderError::Internal(StorageError::Unavailable {
            message: "disk on fire".to_string(),
        });
        assert!(err.to_string().contains("disk on fire"));

        let response = err.to_response();
        assert_eq!(response.code, "INTERNAL_ERROR");
        assert_eq!(response.message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_invalid_input_message_is_verbatim() {
        let err = OrderError::invalid_input("Invalid order name or description.");
        assert_eq!(err.to_string(), "Invalid order name or description.");
        assert_eq!(
            err.to_response().message,
            "Invalid order name or description."
        );
    }

    #[test]
    fn test_ids_exhausted_is_internal() {
        let err = OrderError::from(StorageError::IdsExhausted);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_response().message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::DuplicateKey { id: 42 };
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("already exists"));
    }
}
