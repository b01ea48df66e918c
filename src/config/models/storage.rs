//! Database configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (sqlite://, postgres:// or mysql://)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Apply pending migrations at startup
    #[serde(default)]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            run_migrations: false,
        }
    }
}

impl DatabaseConfig {
    /// Point the URL at another host, keeping credentials, port and database
    pub fn with_host(mut self, host: &str) -> Result<Self, String> {
        let mut url = url::Url::parse(&self.url)
            .map_err(|e| format!("Invalid database URL: {}", e))?;
        url.set_host(Some(host))
            .map_err(|e| format!("Invalid database host {:?}: {}", host, e))?;
        self.url = url.to_string();
        Ok(self)
    }
}
