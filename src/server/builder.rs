//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{RelayError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RelayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

/// Build the server from `config` and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!(build = %config.build(), "Starting invite relay");
    info!(
        upstream = ?config.upstream(),
        environment_code = %config.processing().environment_code,
        "Effective configuration"
    );

    let server = ServerBuilder::new().with_config(config).build().await?;
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("Endpoints:");
    info!("   GET  /             - pull and process pending invitations");
    info!("   POST /             - process pushed invitations");
    info!("   GET  /check?id=    - invitation status");
    info!("   GET  /version      - build information");
    info!("   GET  /health_check - database health");

    server.start().await
}
