//! Validators for each configuration section

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};
use url::Url;

/// Check that `url_str` is an absolute http(s) URL with a host
pub fn validate_http_url(url_str: &str, context: &str) -> Result<(), String> {
    let url =
        Url::parse(url_str).map_err(|e| format!("{} has invalid URL format: {}", context, e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "{} must use http:// or https:// scheme, got: {}",
                context, scheme
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("{} URL must have a valid host", context));
    }

    Ok(())
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating relay configuration");

        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.database
            .validate()
            .map_err(|e| format!("Database config error: {}", e))?;
        self.upstream
            .validate()
            .map_err(|e| format!("Upstream config error: {}", e))?;
        self.processing
            .validate()
            .map_err(|e| format!("Processing config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Workers must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        const SCHEMES: [&str; 4] = ["sqlite:", "postgres://", "postgresql://", "mysql://"];
        if !SCHEMES.iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err(
                "Database URL must start with sqlite:, postgres://, postgresql:// or mysql://"
                    .to_string(),
            );
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.max_connections > 1000 {
            return Err("Database max connections should not exceed 1000".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url(&self.base_url, "Upstream base_url")?;

        if self.timeout_secs == 0 {
            return Err("Upstream timeout must be greater than 0".to_string());
        }

        if self.access_token.is_empty() {
            warn!("Upstream access token is empty, requests will likely be rejected");
        }

        Ok(())
    }
}

impl Validate for ProcessingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.environment_code.0 <= 0 {
            return Err(format!(
                "Environment code must be positive, got {}",
                self.environment_code
            ));
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
