//! Application state management

use crate::api_client::ApiClient;
use rollcall_core::Config;

/// Application state holding configuration and clients
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(config: Config) -> Self {
        let api_base_url = format!("http://{}:{}", config.server.host, config.server.port);
        let mut api_client = ApiClient::new(api_base_url);

        if let Ok(token) = std::env::var("ROLLCALL_SESSION_TOKEN") {
            api_client = api_client.with_session_token(token);
        }

        Self { config, api_client }
    }
}
