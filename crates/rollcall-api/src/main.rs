//! Main entry point for the rollcall admin API server

use rollcall_api::build_router;
use rollcall_core::{Config, context_error, context_error::Result, init_logging};
use rollcall_database::Database;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    init_logging()?;

    let config = Config::load().unwrap_or_else(|err| {
        info!("Failed to load config ({}), using defaults", err);
        Config::default()
    });

    info!(
        "Starting rollcall admin API v{} on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.server.host,
        config.server.port
    );

    info!("Connecting to database...");
    let database = match Database::new(&config).await {
        Ok(db) => {
            info!("Database connection established");
            db
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(context_error!("Database connection failed: {}", e));
        }
    };

    if let Err(e) = database.health_check().await {
        error!("Database health check failed: {}", e);
        return Err(context_error!("Database health check failed: {}", e));
    }
    info!("Database health check passed");

    let app = build_router(config.clone(), database.pool().clone())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| context_error!("Invalid server address: {}", e))?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| context_error!("Failed to bind to {}: {}", addr, e))?;

    info!("API listening on http://{addr}");
    info!("Health endpoint at http://{addr}/health");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| context_error!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
