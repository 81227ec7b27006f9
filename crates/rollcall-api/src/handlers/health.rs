//! Health check endpoints for monitoring and diagnostics

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Database connectivity status
    pub database: DatabaseHealth,
}

/// Database health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    /// Database connection status
    pub connected: bool,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Number of idle connections
    pub idle_connections: u32,
    /// Maximum number of connections allowed
    pub max_connections: u32,
}

/// Readiness check response (simpler than health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Service readiness status
    pub ready: bool,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Basic health check endpoint for monitoring systems
///
/// Returns HTTP 200 with health details if the service is healthy, or
/// HTTP 503 if database connectivity fails.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let database = match check_database_health(&state).await {
        Ok(health) => health,
        Err(e) => {
            error!("Database health check failed: {}", e);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        database,
    };

    info!(
        "Health check completed in {}ms",
        response.database.response_time_ms
    );
    Ok(Json(response))
}

/// Readiness check endpoint for Kubernetes-style health checks
///
/// Returns 200 OK if the service is ready to accept traffic.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    match sqlx::query("SELECT 1").fetch_one(&state.pool).await {
        Ok(_) => Ok(Json(ReadinessResponse {
            ready: true,
            timestamp: chrono::Utc::now(),
        })),
        Err(e) => {
            error!("Readiness check failed - database not accessible: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Check database health and gather pool metrics
#[allow(clippy::cast_possible_truncation)]
async fn check_database_health(state: &Arc<AppState>) -> Result<DatabaseHealth, sqlx::Error> {
    let start_time = std::time::Instant::now();

    sqlx::query("SELECT 1 as health_check")
        .fetch_one(&state.pool)
        .await?;

    let response_time_ms = start_time.elapsed().as_millis() as u64;

    Ok(DatabaseHealth {
        connected: true,
        response_time_ms,
        idle_connections: state.pool.num_idle() as u32,
        max_connections: state.pool.options().get_max_connections(),
    })
}
