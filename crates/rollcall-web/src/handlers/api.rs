//! API proxy handlers for communicating with the backend

use crate::{handlers::pages::SchoolsPageQuery, state::AppState};
use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::error;

/// School listing proxy - forwards to the backend API
pub async fn api_schools(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SchoolsPageQuery>,
) -> Json<serde_json::Value> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match state.api_client.list_schools(page, limit, search).await {
        Ok(response) => match serde_json::to_value(&response) {
            Ok(value) => Json(value),
            Err(e) => {
                error!("Failed to serialize schools response: {}", e);
                Json(serde_json::json!({
                    "error": "Failed to fetch schools",
                    "schools": [],
                    "totalSchools": 0
                }))
            }
        },
        Err(e) => {
            error!("Failed to fetch schools from API: {}", e);
            Json(serde_json::json!({
                "error": "Failed to fetch schools",
                "message": e.to_string(),
                "schools": [],
                "totalSchools": 0
            }))
        }
    }
}

/// School action proxy - posts the page form action to the backend
pub async fn api_school_action(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    match state.api_client.post_school_action().await {
        Ok(value) => Json(value),
        Err(e) => {
            error!("Failed to post school action: {}", e);
            Json(serde_json::json!({
                "error": "Failed to post action",
                "message": e.to_string()
            }))
        }
    }
}

/// Health check for the web server itself
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "rollcall-web",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
