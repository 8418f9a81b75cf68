//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod console;
pub mod network;
pub mod output;
pub mod sensor;
pub mod telemetry;
pub mod trigger;

pub use console::RemoteConsole;
pub use network::{Association, NetworkLink};
pub use output::DigitalOutput;
pub use sensor::ClimateSensor;
pub use telemetry::TelemetryBackend;
pub use trigger::TriggerTransport;
