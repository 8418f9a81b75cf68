//! # gatelink-domain
//!
//! Pure domain model for the gatelink gate opener.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **cooldown window** that guards the gate relay
//! - Define the **debounce window** that filters button bounce
//! - Define the **relay state** and pulse timing
//! - Define the **HTTP request line / response** values exchanged with callers
//! - Define **sensor readings** and the state payloads pushed to the backend
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod cooldown;
pub mod debounce;
pub mod http;
pub mod relay;
pub mod telemetry;
