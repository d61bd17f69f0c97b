//! Response types for the vacation pay API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{CODE_INTERNAL, EngineError};

/// Code reported when request fields fail binding checks.
pub const CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Code reported when the body is not valid JSON for the request type.
pub const CODE_MALFORMED_JSON: &str = "MALFORMED_JSON";

/// Code reported when the request lacks a JSON content type.
pub const CODE_MISSING_CONTENT_TYPE: &str = "MISSING_CONTENT_TYPE";

/// A single field that failed binding checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The JSON name of the offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    /// Creates a field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Per-field failures, present only for binding errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationError>>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            validation_errors: None,
        }
    }

    /// Creates a binding error response listing every failing field.
    pub fn validation_failed(errors: Vec<ValidationError>) -> Self {
        Self {
            code: CODE_VALIDATION_ERROR.to_string(),
            message: "Request validation failed".to_string(),
            validation_errors: Some(errors),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new(CODE_MALFORMED_JSON, message)
    }

    /// Creates the generic internal error response.
    ///
    /// The body carries a fixed message and no failure detail.
    pub fn internal() -> Self {
        Self::new(CODE_INTERNAL, "Internal error")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        if error.is_user_error() {
            ApiErrorResponse::bad_request(ApiError::new(error.code(), error.to_string()))
        } else {
            ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::internal(),
            }
        }
    }
}
