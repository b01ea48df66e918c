//! Storage layer for the relay
//!
//! This module provides persistence for invitation records and the grant
//! tables the named operations write to.

/// Database storage module
pub mod database;

use crate::config::DatabaseConfig;
use crate::core::invite::InvitationStore;
use crate::utils::error::{RelayError, Result};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage layer owning the database pool
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Create a new storage layer, running migrations when configured to
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if let Some(dir) = sqlite_data_dir(&config.url) {
            debug!("Ensuring SQLite data directory {:?}", dir);
            std::fs::create_dir_all(dir).map_err(|e| {
                RelayError::Internal(format!("Failed to create data directory: {}", e))
            })?;
        }

        let database = Arc::new(database::Database::new(config).await?);
        let storage = Self { database };

        if config.run_migrations {
            storage.migrate().await?;
        }

        info!("Storage layer initialized successfully");
        Ok(storage)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        self.database.migrate().await
    }

    /// Health check for the storage backends
    pub async fn health_check(&self) -> StorageHealthStatus {
        let database = match self.database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
                false
            }
        };

        StorageHealthStatus {
            database,
            overall: database,
        }
    }

    /// The database as the store the invitation workflow runs against
    pub fn invitation_store(&self) -> Arc<dyn InvitationStore> {
        self.database.clone()
    }
}

/// Storage health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageHealthStatus {
    /// Database health
    pub database: bool,
    /// Overall health
    pub overall: bool,
}

/// Parent directory of a file-backed SQLite URL, if it has one
fn sqlite_data_dir(url: &str) -> Option<&Path> {
    let path = url.strip_prefix("sqlite://")?;
    let path = path.split('?').next()?;
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
}
