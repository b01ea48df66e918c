use crate::config::UpstreamConfig;
use crate::core::invite::{CompletionReporter, Invitation, InvitationSource};
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

const PENDING_PATH: &str = "api/pending-invitations";
const DONE_PATH: &str = "api/pending-invitations/done";

/// HTTP client for the upstream system-of-record
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("invite-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    /// Absolute endpoint URL carrying the access token
    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/{}", self.base_url, path),
            &[("accessToken", self.access_token.as_str())],
        )
        .map_err(|e| RelayError::config(format!("Invalid upstream URL: {}", e)))
    }

    async fn check_status(response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(%status, body = %body, "{} rejected by upstream", action);
        Err(RelayError::upstream(format!(
            "{} returned status {}: {}",
            action, status, body
        )))
    }
}

#[async_trait]
impl InvitationSource for UpstreamClient {
    async fn fetch_pending(&self) -> Result<Vec<Invitation>> {
        let url = self.endpoint(PENDING_PATH)?;
        debug!(path = PENDING_PATH, "fetching pending invitations");

        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response, "Fetching pending invitations").await?;

        let body = response.bytes().await?;
        let invitations: Vec<Invitation> = serde_json::from_slice(&body).map_err(|e| {
            RelayError::upstream(format!("Failed to decode pending invitations: {}", e))
        })?;

        info!(count = invitations.len(), "fetched pending invitations");
        Ok(invitations)
    }
}

#[async_trait]
impl CompletionReporter for UpstreamClient {
    async fn report_done(&self, ids: &[String]) -> Result<()> {
        let url = self.endpoint(DONE_PATH)?;
        debug!(count = ids.len(), "reporting invitations done");

        let response = self
            .client
            .put(url)
            .header("Content-Type", "application/json")
            .header("Cache-Control", "no-cache")
            .json(ids)
            .send()
            .await?;
        Self::check_status(response, "Marking invitations done").await?;

        info!(count = ids.len(), "upstream acknowledged completion");
        Ok(())
    }
}
