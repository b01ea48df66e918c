//! Configuration management for the relay
//!
//! This module handles loading, overriding and validation of the relay
//! configuration. Everything the process needs is carried in [`Config`] and
//! handed to constructors; there is no global configuration state.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RelayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/relay.yaml";

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Relay configuration
    pub relay: RelayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RelayError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let relay: RelayConfig = serde_yaml::from_str(content)
            .map_err(|e| RelayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { relay };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the file when it exists, fall back to defaults otherwise, then apply
    /// process environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            debug!("No configuration file at {:?}, using defaults", path);
            Self::default()
        };

        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` and re-validate
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            relay: self.relay.apply_overrides(lookup)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.relay.server
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.relay.database
    }

    /// Get upstream configuration
    pub fn upstream(&self) -> &UpstreamConfig {
        &self.relay.upstream
    }

    /// Get processing configuration
    pub fn processing(&self) -> &ProcessingConfig {
        &self.relay.processing
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.relay.logging
    }

    /// Get build metadata
    pub fn build(&self) -> &BuildConfig {
        &self.relay.build
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.relay.validate().map_err(RelayError::Config)
    }
}
