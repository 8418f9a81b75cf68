//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GatelinkError`] via `#[from]` or an `into_domain` helper.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum GatelinkError {
    /// The climate sensor failed to produce a reading.
    #[error("sensor error")]
    Sensor(#[from] SensorError),

    /// The network link is missing or could not be established.
    #[error("network error")]
    Network(#[from] NetworkError),

    /// An adapter-specific transport failure (HTTP client, socket, …).
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure to drive a digital output pin.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The pin could not be set to the requested level.
    #[error("pin {pin} could not be driven")]
    Drive {
        /// GPIO number.
        pin: u8,
    },
}

/// Failure to read the climate sensor.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    /// The sensor did not answer the measurement request.
    #[error("sensor on pin {pin} did not respond")]
    NoResponse {
        /// GPIO number of the data line.
        pin: u8,
    },
}

/// Failure on the network association layer.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Association did not complete within the allowed time.
    #[error("association with {ssid:?} timed out after {timeout_secs}s")]
    Timeout {
        /// Network name.
        ssid: String,
        /// Timeout that elapsed.
        timeout_secs: u64,
    },

    /// An operation needed the link but it is down.
    #[error("network link is not associated")]
    NotAssociated,
}
