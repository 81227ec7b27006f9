//! Application state management

use rollcall_core::Config;
use rollcall_database::PgPool;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Database connection pool
    pub pool: PgPool,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub const fn new(config: Config, pool: PgPool) -> Self {
        Self { config, pool }
    }
}
