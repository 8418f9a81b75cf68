//! # gatelink-adapter-http-reqwest
//!
//! Outbound HTTP built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - [`HttpTrigger`] — `GET <target>` towards the gate controller, reading
//!   only the status code
//! - [`HomeAssistant`] — bearer-authenticated probe of `/api/` and
//!   `POST /api/states/<entity_id>` state updates
//!
//! Every client is built with an explicit request timeout so no call can
//! hang the button loop indefinitely. Nothing is retried.
//!
//! ## Dependency rule
//! Depends on `gatelink-app` (port traits) and `gatelink-domain`.

mod config;
mod error;
mod home_assistant;
mod trigger;

pub use config::{BackendConfig, TriggerConfig};
pub use error::ClientError;
pub use home_assistant::HomeAssistant;
pub use trigger::HttpTrigger;

#[cfg(test)]
mod test_server;
