//! Outbound HTTP configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where and how to send the open request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Full URL of the gate's open endpoint.
    pub target_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            target_url: "http://192.168.1.50/open".to_string(),
            timeout_ms: 5_000,
        }
    }
}

impl TriggerConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Home Assistant REST API access.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL, without the `/api` suffix.
    pub url: String,
    /// Long-lived access token.
    pub token: String,
    /// Request timeout in milliseconds, applied to each call.
    ///
    /// A telemetry cycle makes two calls in sequence inside the button loop,
    /// so an unresponsive backend holds the loop for up to twice this value.
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://homeassistant.local:8123".to_string(),
            token: String::new(),
            timeout_ms: 2_000,
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
