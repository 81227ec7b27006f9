//! Rollcall admin API server library

#![forbid(unsafe_code)]

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use rollcall_core::Config;
use rollcall_database::PgPool;
use std::sync::Arc;

/// Build the API router with all routes and middleware
#[must_use]
pub fn build_router(config: Config, pool: PgPool) -> Router {
    let state = Arc::new(AppState::new(config, pool));

    routes::build_router(Arc::clone(&state)).with_state(state)
}
