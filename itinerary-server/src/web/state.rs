//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Reconstruction itself is stateless; only the request limits are shared.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
