use std::sync::Arc;

use tunesmith_replicate::client::ReplicateClient;
use tunesmith_replicate::poll::PollConfig;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Upstream prediction API client (owns the reqwest connection pool).
    pub replicate: Arc<ReplicateClient>,
    /// Polling parameters for asynchronous predictions.
    pub poll: PollConfig,
}

impl AppState {
    /// Build application state from configuration, constructing the
    /// upstream client from the configured URL and credential.
    pub fn new(config: ServerConfig, poll: PollConfig) -> Self {
        let replicate = ReplicateClient::new(
            config.replicate_api_url.clone(),
            config.replicate_api_key.clone(),
        );

        Self {
            config: Arc::new(config),
            replicate: Arc::new(replicate),
            poll,
        }
    }
}
