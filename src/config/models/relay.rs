//! Top-level relay configuration

use super::*;
use crate::core::invite::EnvironmentCode;
use serde::{Deserialize, Serialize};

/// Main relay configuration, one section per concern
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

impl RelayConfig {
    /// Apply deployment overrides looked up by variable name
    ///
    /// | variable           | effect                                          |
    /// |--------------------|-------------------------------------------------|
    /// | `DATABASE_URL`     | replaces `database.url`                         |
    /// | `MYSQL_HOST`       | replaces the host part of `database.url`        |
    /// | `CASE_HOST`        | replaces `upstream.base_url`                    |
    /// | `API_ACCESS_TOKEN` | replaces `upstream.access_token`                |
    /// | `ENV_CODE`         | replaces `processing.environment_code`          |
    /// | `UP_STAGE`         | becomes `build.version`, switches logs to JSON  |
    /// | `UP_COMMIT`        | replaces `build.commit`                         |
    pub fn apply_overrides<F>(mut self, lookup: F) -> crate::utils::error::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        use crate::utils::error::RelayError;

        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(host) = lookup("MYSQL_HOST") {
            self.database = self.database.with_host(&host).map_err(RelayError::Config)?;
        }
        if let Some(host) = lookup("CASE_HOST") {
            self.upstream.base_url = host;
        }
        if let Some(token) = lookup("API_ACCESS_TOKEN") {
            self.upstream.access_token = token;
        }
        if let Some(code) = lookup("ENV_CODE") {
            let code = code
                .trim()
                .parse::<i32>()
                .map_err(|e| RelayError::config(format!("Invalid ENV_CODE {:?}: {}", code, e)))?;
            self.processing.environment_code = EnvironmentCode(code);
        }
        if let Some(stage) = lookup("UP_STAGE").filter(|s| !s.is_empty()) {
            self.logging.format = LogFormat::Json;
            self.build.version = stage;
        }
        if let Some(commit) = lookup("UP_COMMIT").filter(|s| !s.is_empty()) {
            self.build.commit = commit;
        }
        Ok(self)
    }
}
