//! API route definitions

use crate::{handlers, state::AppState};
use axum::{
    Router, middleware,
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

/// Build the school listing routes with session authentication
pub fn api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/schools",
            get(handlers::schools::list_schools).post(handlers::schools::school_action),
        )
        .route("/api", get(api_info))
        .route("/", get(root_endpoint))
        .layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware,
        ))
        .layer(CompressionLayer::new())
}

/// Build health check routes (no authentication required)
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
}

/// Combine all routes into a single router
///
/// The request timeout and CORS policy come from configuration.
pub fn build_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let timeout = Duration::from_secs(state.config.security.request_timeout);
    let cors = crate::middleware::cors::cors_layer(&state.config.listing);

    let mut router = Router::new()
        .merge(api_routes(Arc::clone(&state)))
        .merge(health_routes())
        .fallback(not_found_handler)
        .layer(TimeoutLayer::new(timeout));

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}

/// Root endpoint for basic connectivity
async fn root_endpoint() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "Rollcall Admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok"
    }))
}

/// API info endpoint
async fn api_info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "api": "Rollcall Admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "schools": "/api/schools",
            "health": "/health"
        }
    }))
}
