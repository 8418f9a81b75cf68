//! Virtual DHT11 — integer climate readings around a base value.

use gatelink_app::ports::ClimateSensor;
use gatelink_domain::error::SensorError;
use gatelink_domain::telemetry::SensorReading;
use gatelink_domain::time::now;

/// A simulated DHT11 climate sensor.
///
/// Readings cycle through `base - 1`, `base`, `base + 1`. When `fail_every`
/// is set, every n-th measurement reports that the sensor did not respond.
pub struct VirtualDht11 {
    pin: u8,
    temperature: i8,
    humidity: u8,
    fail_every: Option<u32>,
    reads: u32,
}

impl VirtualDht11 {
    #[must_use]
    pub fn new(pin: u8, temperature: i8, humidity: u8) -> Self {
        Self {
            pin,
            temperature,
            humidity,
            fail_every: None,
            reads: 0,
        }
    }

    /// Make every `n`-th read fail.
    #[must_use]
    pub fn failing_every(mut self, n: u32) -> Self {
        self.fail_every = Some(n.max(1));
        self
    }
}

impl ClimateSensor for VirtualDht11 {
    async fn measure(&mut self) -> Result<SensorReading, SensorError> {
        self.reads = self.reads.wrapping_add(1);
        if self.fail_every.is_some_and(|n| self.reads % n == 0) {
            return Err(SensorError::NoResponse { pin: self.pin });
        }
        let wobble: i8 = match self.reads % 3 {
            0 => -1,
            1 => 0,
            _ => 1,
        };
        Ok(SensorReading {
            temperature: f32::from(self.temperature.saturating_add(wobble)),
            humidity: f32::from(self.humidity.saturating_add_signed(wobble).min(100)),
            measured_at: now(),
        })
    }
}
