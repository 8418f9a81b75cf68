//! Trigger transport — `GET <target>` towards the gate.

use gatelink_app::ports::TriggerTransport;
use gatelink_domain::error::GatelinkError;

use crate::config::TriggerConfig;
use crate::error::ClientError;

/// Sends open requests to the gate controller.
#[derive(Debug, Clone)]
pub struct HttpTrigger {
    client: reqwest::Client,
    target_url: String,
}

impl HttpTrigger {
    /// Build a trigger with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the HTTP client cannot be created.
    pub fn new(config: &TriggerConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            client,
            target_url: config.target_url.clone(),
        })
    }
}

impl TriggerTransport for HttpTrigger {
    async fn send_open(&self) -> Result<u16, GatelinkError> {
        tracing::info!(url = %self.target_url, "sending open request");
        let response = self
            .client
            .get(&self.target_url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: self.target_url.clone(),
                source,
            })?;
        let status = response.status().as_u16();
        tracing::info!(status, "gate answered");
        Ok(status)
    }
}
