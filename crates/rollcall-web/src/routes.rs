//! Route definitions for the web interface

use crate::{
    handlers::{api, pages},
    state::AppState,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/admin/schools", get(pages::schools_page))
        // API proxy routes
        .route(
            "/api/schools",
            get(api::api_schools).post(api::api_school_action),
        )
        // Health check
        .route("/health", get(api::health_check))
}
