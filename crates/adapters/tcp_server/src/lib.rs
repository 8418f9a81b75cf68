//! # gatelink-adapter-tcp
//!
//! Driving adapter that exposes the [`GateController`] over TCP.
//!
//! ## How it works
//!
//! One task accepts a connection, reads a single request of at most
//! [`MAX_REQUEST_BYTES`], lets the controller answer it, writes the response
//! and closes the socket before accepting the next one. There is no
//! keep-alive, no request queue and no worker pool: a client that stalls
//! blocks everybody else until the read timeout fires.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `gatelink-app` and `gatelink-domain`.
//!
//! [`GateController`]: gatelink_app::services::gate_controller::GateController
//! [`MAX_REQUEST_BYTES`]: gatelink_domain::http::MAX_REQUEST_BYTES

mod error;
pub mod framing;
mod server;

pub use error::ServerError;
pub use server::{GateServer, ServerSettings};
