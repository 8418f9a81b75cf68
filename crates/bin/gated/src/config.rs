//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `gated.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use gatelink_adapter_tcp::ServerSettings;
use gatelink_app::services::gate_controller::GateTimings;
use gatelink_app::services::startup::LinkSettings;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Relay and cooldown settings.
    pub gate: GateConfig,
    /// Network association settings.
    pub network: NetworkConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Pending-connection queue length.
    pub backlog: u32,
    /// Per-connection read timeout, in milliseconds.
    pub read_timeout_ms: u64,
}

/// Relay and cooldown configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// GPIO driving the relay coil.
    pub relay_pin: u8,
    /// Coil hold time, in milliseconds.
    pub pulse_ms: u64,
    /// Minimum spacing between accepted triggers, in milliseconds.
    pub cooldown_ms: u64,
}

/// Network association configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub ssid: String,
    pub password: String,
    /// Give up associating after this many seconds.
    pub connect_timeout_secs: u64,
    /// Address reported once associated.
    pub address: IpAddr,
    /// Whether the simulated access point answers at all.
    pub available: bool,
    /// Simulated association time, in milliseconds.
    pub join_delay_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `gated.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("gated.toml")?;
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
        if let Ok(val) = std::env::var("GATELINK_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("GATELINK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("GATELINK_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("GATELINK_WIFI_SSID") {
            self.network.ssid = val;
        }
        if let Ok(val) = std::env::var("GATELINK_WIFI_PASSWORD") {
            self.network.password = val;
        }
        if let Ok(val) = std::env::var("GATELINK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.server.read_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "read_timeout_ms must be non-zero".to_string(),
            ));
        }
        if self.gate.pulse_ms == 0 {
            return Err(ConfigError::Validation(
                "pulse_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Listener settings for the TCP adapter.
    #[must_use]
    pub fn server_settings(&self) -> ServerSettings {
        ServerSettings {
            bind: self.bind_addr(),
            backlog: self.server.backlog,
            read_timeout: Duration::from_millis(self.server.read_timeout_ms),
        }
    }
}

impl GateConfig {
    #[must_use]
    pub fn timings(&self) -> GateTimings {
        GateTimings {
            cooldown: Duration::from_millis(self.cooldown_ms),
            pulse: Duration::from_millis(self.pulse_ms),
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

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
            backlog: 2,
            read_timeout_ms: 5_000,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        let timings = GateTimings::default();
        Self {
            relay_pin: 10,
            pulse_ms: u64::try_from(timings.pulse.as_millis()).unwrap_or(400),
            cooldown_ms: u64::try_from(timings.cooldown.as_millis()).unwrap_or(5_000),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ssid: String::new(),
            password: String::new(),
            connect_timeout_secs: 20,
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            available: true,
            join_delay_ms: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "gated=info,gatelink=info".to_string(),
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
