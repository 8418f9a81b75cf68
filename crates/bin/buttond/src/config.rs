//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `buttond.toml` in the working directory. Every field has a
//! default, so the file is optional. Environment variables take precedence
//! over file values.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use gatelink_adapter_http_reqwest::{BackendConfig, TriggerConfig};
use gatelink_app::services::startup::LinkSettings;
use gatelink_app::services::trigger_client::{
    ClientTimings, DEFAULT_FEEDBACK, DEFAULT_TELEMETRY_EVERY, DEFAULT_TICK,
};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub button: ButtonConfig,
    pub indicator: IndicatorConfig,
    pub sensor: SensorConfig,
    #[serde(rename = "loop")]
    pub main_loop: LoopConfig,
    /// Gate endpoint.
    pub trigger: TriggerConfig,
    /// Home Assistant endpoint.
    pub backend: BackendConfig,
    pub network: NetworkConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

/// Push button input.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub pin: u8,
    /// Edges closer than this to the last accepted one are ignored.
    pub debounce_ms: u64,
}

/// Feedback LED.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub pin: u8,
    /// How long the LED stays lit after the gate opened.
    pub feedback_ms: u64,
}

/// Climate sensor.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    pub pin: u8,
    /// Temperature the simulated sensor hovers around, in °C.
    pub base_temperature: i8,
    /// Relative humidity the simulated sensor hovers around, in %.
    pub base_humidity: u8,
    /// Make every n-th simulated read fail; `0` never fails.
    pub fail_every: u32,
}

/// Main loop cadence.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    pub tick_ms: u64,
    /// Ticks between two climate reports.
    pub telemetry_every: u32,
}

/// Network association configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub ssid: String,
    pub password: String,
    pub connect_timeout_secs: u64,
    pub address: IpAddr,
    /// Whether the simulated access point answers at all.
    pub available: bool,
    pub join_delay_ms: u64,
}

/// Remote maintenance console.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub password: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `buttond.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("buttond.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        let vars = [
            ("GATELINK_TARGET_URL", &mut self.trigger.target_url),
            ("GATELINK_BACKEND_URL", &mut self.backend.url),
            ("GATELINK_BACKEND_TOKEN", &mut self.backend.token),
            ("GATELINK_WIFI_SSID", &mut self.network.ssid),
            ("GATELINK_WIFI_PASSWORD", &mut self.network.password),
            ("GATELINK_CONSOLE_PASSWORD", &mut self.console.password),
        ];
        for (name, field) in vars {
            if let Ok(val) = std::env::var(name) {
                *field = val;
            }
        }
        // RUST_LOG wins over GATELINK_LOG.
        if let Ok(val) = std::env::var("RUST_LOG").or_else(|_| std::env::var("GATELINK_LOG")) {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.main_loop.tick_ms == 0 {
            return Err(ConfigError::Validation("tick_ms must be non-zero".to_string()));
        }
        if self.main_loop.telemetry_every == 0 {
            return Err(ConfigError::Validation(
                "telemetry_every must be non-zero".to_string(),
            ));
        }
        require_plain_http("target_url", &self.trigger.target_url)?;
        require_plain_http("backend.url", &self.backend.url)?;
        Ok(())
    }

    /// Loop timings for the trigger client.
    #[must_use]
    pub fn timings(&self) -> ClientTimings {
        ClientTimings {
            tick: Duration::from_millis(self.main_loop.tick_ms),
            telemetry_every: self.main_loop.telemetry_every,
            feedback: Duration::from_millis(self.indicator.feedback_ms),
        }
    }
}

impl NetworkConfig {
    #[must_use]
    pub fn settings(&self) -> LinkSettings {
        LinkSettings {
            ssid: self.ssid.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    #[must_use]
    pub fn join_delay(&self) -> Duration {
        Duration::from_millis(self.join_delay_ms)
    }
}

/// The HTTP client is built without TLS, so only `http://` URLs can be reached.
fn require_plain_http(name: &str, url: &str) -> Result<(), ConfigError> {
    let host = url.strip_prefix("http://").unwrap_or_default();
    if host.is_empty() || host.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{name} must be an http:// URL with a host, got {url:?}"
        )));
    }
    Ok(())
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            pin: 9,
            debounce_ms: 300,
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            pin: 2,
            feedback_ms: millis(DEFAULT_FEEDBACK),
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            pin: 10,
            base_temperature: 21,
            base_humidity: 45,
            fail_every: 0,
        }
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_ms: millis(DEFAULT_TICK),
            telemetry_every: DEFAULT_TELEMETRY_EVERY,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ssid: String::new(),
            password: String::new(),
            connect_timeout_secs: 10,
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            available: true,
            join_delay_ms: 0,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            password: "gate1234".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "buttond=info,gatelink=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
