//! # gatelink-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DigitalOutput` — relay coil and indicator LED
//!   - `NetworkLink` — Wi-Fi association
//!   - `RemoteConsole` — optional maintenance console
//!   - `ClimateSensor` — temperature/humidity probe
//!   - `TelemetryBackend` — home-automation state API
//!   - `TriggerTransport` — outbound `/open` call to the gate
//! - Define the two use-cases:
//!   - `GateController` — cooldown-gated relay pulses behind `/open`
//!   - `TriggerClient` — debounced button presses dispatched to the gate
//! - Provide **in-process infrastructure** that needs no IO (`ButtonLatch`)
//!
//! ## Dependency rule
//! Depends on `gatelink-domain` only (plus `tokio::time` / `tokio::sync`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod button_latch;
pub mod ports;
pub mod pulse;
pub mod services;
