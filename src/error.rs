//! Error types for the contact book service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation failures live in [`crate::domain::ValidationError`]; this module wraps
//! them for the HTTP layer and covers configuration loading.

use crate::domain::ValidationError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by HTTP handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Repository rejected the operation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Search `type` was neither `phone` nor `name`
    #[error("Invalid search type: {0}")]
    InvalidSearchType(String),

    /// Request body was missing, not JSON, or the wrong shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Required query parameter missing or malformed
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidSearchType(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
