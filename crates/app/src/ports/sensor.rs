//! Climate sensor port.

use std::future::Future;

use gatelink_domain::error::SensorError;
use gatelink_domain::telemetry::SensorReading;

/// A temperature/humidity probe.
pub trait ClimateSensor {
    /// Take one measurement.
    fn measure(&mut self) -> impl Future<Output = Result<SensorReading, SensorError>> + Send;
}
