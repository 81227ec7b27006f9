//! Session authentication middleware

use crate::{middleware::MiddlewareError, state::AppState};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use rollcall_core::Role;
use rollcall_database::queries;
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Session token header name
const SESSION_HEADER: &str = "X-Session-Token";
/// Alternative header name (commonly used)
const AUTH_HEADER: &str = "Authorization";

/// Authenticated user attached to request extensions
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID
    pub id: Uuid,
    /// User email
    pub email: String,
    /// Platform role
    pub role: Role,
}

/// Authentication middleware that validates session tokens
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, axum::Json<MiddlewareError>)> {
    // Skip authentication for health check endpoints
    let path = request.uri().path();
    if path.starts_with("/health") || path.starts_with("/ready") {
        return Ok(next.run(request).await);
    }

    // Skip authentication if not required
    if !state.config.security.require_auth {
        debug!("Session authentication disabled, skipping validation");
        return Ok(next.run(request).await);
    }

    let token = extract_session_token(&headers)?;
    let user = validate_session_token(&state, &token).await?;

    debug!("Authentication successful for user {}", user.id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Extract the session token from request headers
fn extract_session_token(
    headers: &HeaderMap,
) -> Result<String, (StatusCode, axum::Json<MiddlewareError>)> {
    if let Some(token) = headers.get(SESSION_HEADER) {
        return token.to_str().map(String::from).map_err(|_| {
            MiddlewareError::new(
                "Invalid token format in X-Session-Token header",
                "INVALID_SESSION",
            )
            .into()
        });
    }

    if let Some(auth_header) = headers.get(AUTH_HEADER) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(bearer_token) = auth_str.strip_prefix("Bearer ") {
                return Ok(bearer_token.to_string());
            }
        }
        return Err(MiddlewareError::new(
            "Invalid Authorization header format. Use 'Bearer <token>'",
            "INVALID_SESSION",
        )
        .into());
    }

    Err(MiddlewareError::new(
        "Session token required. Provide via X-Session-Token header or Authorization: Bearer <token>",
        "MISSING_SESSION",
    )
    .into())
}

/// Validate a session token against the database
async fn validate_session_token(
    state: &Arc<AppState>,
    token: &str,
) -> Result<AuthUser, (StatusCode, axum::Json<MiddlewareError>)> {
    // Hash the token for database lookup
    let token_hash = format!("{:x}", md5::compute(token));

    match queries::validate_session(&state.pool, &token_hash).await {
        Ok(Some(session)) => {
            if !session.active {
                warn!("Session for inactive user: {}", session.user_id);
                return Err(MiddlewareError::new("User account is inactive", "INACTIVE_USER").into());
            }

            if session.expires_at < chrono::Utc::now() {
                warn!("Expired session for user: {}", session.user_id);
                return Err(MiddlewareError::new("Session has expired", "EXPIRED_SESSION").into());
            }

            let role = session.role.parse::<Role>().map_err(|e| {
                error!("Unknown role for user {}: {}", session.user_id, e);
                <(StatusCode, axum::Json<MiddlewareError>)>::from(MiddlewareError::new(
                    "Failed to validate session",
                    "VALIDATION_ERROR",
                ))
            })?;

            Ok(AuthUser {
                id: session.user_id,
                email: session.email,
                role,
            })
        }
        Ok(None) => {
            warn!("Invalid session token attempted");
            Err(MiddlewareError::new("Invalid session token", "INVALID_SESSION").into())
        }
        Err(e) => {
            error!("Database error during session validation: {}", e);
            Err(MiddlewareError::new("Failed to validate session", "VALIDATION_ERROR").into())
        }
    }
}
