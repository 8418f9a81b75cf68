//! Home Assistant REST backend.

use gatelink_app::ports::TelemetryBackend;
use gatelink_domain::error::GatelinkError;
use gatelink_domain::telemetry::StateUpdate;

use crate::config::BackendConfig;
use crate::error::ClientError;

/// Client for the Home Assistant states API.
#[derive(Debug, Clone)]
pub struct HomeAssistant {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HomeAssistant {
    /// Build a backend client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the HTTP client cannot be created.
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: String,
    ) -> Result<u16, ClientError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| ClientError::Request { url, source })?;
        Ok(response.status().as_u16())
    }
}

impl TelemetryBackend for HomeAssistant {
    async fn probe(&self) -> Result<u16, GatelinkError> {
        let url = format!("{}/api/", self.base_url);
        let status = self.send(self.client.get(&url), url).await?;
        tracing::debug!(status, "backend probe answered");
        Ok(status)
    }

    async fn push_state(
        &self,
        entity_id: &str,
        update: &StateUpdate,
    ) -> Result<u16, GatelinkError> {
        let url = format!("{}/api/states/{entity_id}", self.base_url);
        let status = self.send(self.client.post(&url).json(update), url).await?;
        tracing::debug!(entity_id, status, "state pushed");
        Ok(status)
    }
}
