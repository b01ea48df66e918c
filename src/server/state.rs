//! Application state shared across HTTP handlers

use crate::config::{BuildConfig, Config};
use crate::core::invite::InviteService;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything a handler needs is reachable from here; the process entry point
/// builds it once and owns its lifecycle.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration (shared read-only)
    pub config: Arc<Config>,
    /// Pull, push and status entry points
    pub service: InviteService,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    pub fn new(config: Config, service: InviteService, storage: StorageLayer) -> Self {
        Self {
            config: Arc::new(config),
            service,
            storage: Arc::new(storage),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build metadata reported by `/version`
    pub fn build(&self) -> &BuildConfig {
        self.config.build()
    }
}
