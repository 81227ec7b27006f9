//! Middleware for authentication and request processing

pub mod auth;
pub mod cors;

use axum::{http::StatusCode, response::Json};
use serde::Serialize;

/// Standard error response for middleware
#[derive(Debug, Serialize)]
pub struct MiddlewareError {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl MiddlewareError {
    /// Create a new middleware error
    pub fn new(error: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            code: code.to_string(),
        }
    }
}

/// Convert middleware error to HTTP response
impl From<MiddlewareError> for (StatusCode, Json<MiddlewareError>) {
    fn from(error: MiddlewareError) -> Self {
        let status = match error.code.as_str() {
            "UNAUTHORIZED" | "INVALID_SESSION" | "MISSING_SESSION" | "EXPIRED_SESSION"
            | "INACTIVE_USER" => StatusCode::UNAUTHORIZED,
            "FORBIDDEN" => StatusCode::FORBIDDEN,
            "INVALID_REQUEST" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(error))
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_status_mapping() {
        let (status, _) = <(StatusCode, Json<MiddlewareError>)>::from(MiddlewareError::new(
            "no session",
            "MISSING_SESSION",
        ));
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) =
            <(StatusCode, Json<MiddlewareError>)>::from(MiddlewareError::new("nope", "FORBIDDEN"));
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = <(StatusCode, Json<MiddlewareError>)>::from(MiddlewareError::new(
            "boom",
            "VALIDATION_ERROR",
        ));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
