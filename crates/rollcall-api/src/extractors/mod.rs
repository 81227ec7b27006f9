//! Custom extractors for request processing

pub mod search;

use crate::middleware::auth::AuthUser;
use axum::{
    Json, async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// Custom error type for extractors
#[derive(Debug)]
pub struct ExtractorError {
    /// Error message
    pub message: String,
    /// HTTP status code
    pub status: StatusCode,
    /// Error code for API responses
    pub code: String,
}

impl ExtractorError {
    /// Create a new extractor error
    pub fn new(message: impl Into<String>, status: StatusCode, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            code: code.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST, "BAD_REQUEST")
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
    }
}

impl fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ExtractorError {}

/// Error response body for extractor rejections
#[derive(Debug, Serialize)]
pub struct ExtractorErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional context
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ExtractorError {
    fn into_response(self) -> Response {
        let response = ExtractorErrorResponse {
            error: self.message,
            code: self.code,
            details: None,
        };

        (self.status, Json(response)).into_response()
    }
}

/// Extractor for the authenticated user placed in request extensions
/// by the session middleware
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ExtractorError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ExtractorError::unauthorized("Authentication required"))
    }
}
