use crate::config::DatabaseConfig;
use crate::utils::error::{RelayError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::migration::Migrator;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Open the connection pool described by `config`
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let db = Self::try_connect(config).await?;
        info!(
            "Database connection established ({:?})",
            db.get_database_backend()
        );
        Ok(Self { db })
    }

    async fn try_connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(RelayError::Database)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            RelayError::Migration(e.to_string())
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");
        self.db.ping().await.map_err(RelayError::Database)?;
        debug!("Database health check passed");
        Ok(())
    }
}
