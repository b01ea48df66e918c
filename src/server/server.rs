//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::invite::InviteService;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::UpstreamClient;
use crate::storage::StorageLayer;
use crate::utils::error::{RelayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Connect storage and upstream and assemble the application state
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = StorageLayer::new(config.database()).await?;
        let upstream = Arc::new(UpstreamClient::new(config.upstream())?);
        let service = InviteService::new(
            storage.invitation_store(),
            upstream.clone(),
            upstream,
            config.processing().environment_code,
            CancellationToken::new(),
        );

        Ok(Self::from_state(
            config.server().clone(),
            AppState::new(config.clone(), service, storage),
        ))
    }

    pub fn from_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add((
                "Server",
                concat!("invite-relay/", env!("CARGO_PKG_VERSION")),
            )))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server and run until a shutdown signal arrives
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);

        let shutdown = self.state.service.shutdown_token().clone();
        tokio::spawn(async move {
            Self::shutdown_signal().await;
            shutdown.cancel();
        });

        let state = web::Data::new(self.state);
        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(self.config.worker_count())
            .shutdown_timeout(self.config.timeout)
            .client_request_timeout(Duration::from_secs(self.config.timeout))
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| RelayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
