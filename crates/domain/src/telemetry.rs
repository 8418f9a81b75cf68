//! Climate readings and the state documents pushed to the home-automation backend.

use serde::Serialize;

use crate::time::Timestamp;

/// Backend entity receiving the temperature.
pub const TEMPERATURE_ENTITY: &str = "sensor.gate_temp";
/// Backend entity receiving the relative humidity.
pub const HUMIDITY_ENTITY: &str = "sensor.gate_hum";

/// One measurement from the climate sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Degrees Celsius.
    pub temperature: f32,
    /// Relative humidity, percent.
    pub humidity: f32,
    pub measured_at: Timestamp,
}

/// Body of a `POST /api/states/<entity_id>` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateUpdate {
    pub state: f32,
    pub attributes: StateAttributes,
}

/// Presentation metadata attached to a [`StateUpdate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateAttributes {
    pub unit_of_measurement: &'static str,
    pub friendly_name: &'static str,
    pub state_class: &'static str,
}

impl SensorReading {
    /// State updates for every backend entity, paired with the entity id.
    #[must_use]
    pub fn state_updates(&self) -> [(&'static str, StateUpdate); 2] {
        [
            (
                TEMPERATURE_ENTITY,
                StateUpdate {
                    state: self.temperature,
                    attributes: StateAttributes {
                        unit_of_measurement: "C",
                        friendly_name: "ESP Temperature",
                        state_class: "measurement",
                    },
                },
            ),
            (
                HUMIDITY_ENTITY,
                StateUpdate {
                    state: self.humidity,
                    attributes: StateAttributes {
                        unit_of_measurement: "%",
                        friendly_name: "ESP Humidity",
                        state_class: "measurement",
                    },
                },
            ),
        ]
    }
}
