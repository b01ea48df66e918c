//! Mock case frontend

use invite_relay::config::UpstreamConfig;
use invite_relay::core::invite::Invitation;
use invite_relay::services::UpstreamClient;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "test-token";

/// Mock upstream serving a fixed pending list and accepting done reports
pub struct MockUpstream {
    pub server: MockServer,
}

impl MockUpstream {
    /// Start a server that serves `pending` and answers done reports with `done_status`
    pub async fn start(pending: &[Invitation], done_status: u16) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/pending-invitations"))
            .and(query_param("accessToken", ACCESS_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(pending))
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/api/pending-invitations/done"))
            .and(query_param("accessToken", ACCESS_TOKEN))
            .respond_with(ResponseTemplate::new(done_status))
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn config(&self) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.server.uri(),
            access_token: ACCESS_TOKEN.to_string(),
            timeout_secs: 5,
        }
    }

    pub fn client(&self) -> Arc<UpstreamClient> {
        Arc::new(UpstreamClient::new(&self.config()).expect("Failed to build upstream client"))
    }

    /// Id arrays received by the done endpoint, in order
    pub async fn reported(&self) -> Vec<Vec<String>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == "/api/pending-invitations/done")
            .map(|request| {
                serde_json::from_slice(&request.body).expect("done body is a JSON id array")
            })
            .collect()
    }
}
