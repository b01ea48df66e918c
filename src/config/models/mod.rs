//! Configuration data models
//!
//! This module defines all configuration structures used by the relay.

pub mod build;
pub mod logging;
pub mod processing;
pub mod relay;
pub mod server;
pub mod storage;
pub mod upstream;

pub use build::*;
pub use logging::*;
pub use processing::*;
pub use relay::*;
pub use server::*;
pub use storage::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_database_url() -> String {
    "sqlite://data/relay.db?mode=rwc".to_string()
}

pub fn default_upstream_url() -> String {
    "http://localhost:3000".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
