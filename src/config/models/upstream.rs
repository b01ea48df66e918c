//! Upstream system-of-record configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Case frontend the relay pulls invitations from and reports to
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL, e.g. https://case.example.com
    #[serde(default = "default_upstream_url")]
    pub base_url: String,
    /// Access token sent as the `accessToken` query parameter
    #[serde(default)]
    pub access_token: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            access_token: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
