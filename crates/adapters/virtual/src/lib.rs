//! # gatelink-adapter-virtual
//!
//! Simulated hardware for running both nodes on a regular host and for
//! testing.
//!
//! ## Provided devices
//!
//! | Device | Port | Behaviour |
//! |--------|------|-----------|
//! | [`VirtualOutput`] | `DigitalOutput` | Records levels; used as relay coil and indicator LED |
//! | [`VirtualDht11`] | `ClimateSensor` | Integer readings wobbling around a base value |
//! | [`VirtualLink`] | `NetworkLink` | Joins after a delay, or times out when unavailable |
//! | [`LogConsole`] | `RemoteConsole` | Validates the password and logs |
//!
//! ## Dependency rule
//!
//! Depends on `gatelink-app` (port traits) and `gatelink-domain` only.

mod devices;
mod error;

pub use devices::{LogConsole, OutputProbe, VirtualDht11, VirtualLink, VirtualOutput};
pub use error::VirtualError;
