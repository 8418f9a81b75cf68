//! # gated — gate controller daemon
//!
//! Composition root for the gate node.
//!
//! ## Responsibilities
//! - Load configuration (`gated.toml` + `GATELINK_*` env overrides)
//! - Install the tracing subscriber
//! - Join the network; failure is logged and the server starts anyway
//! - Drive the relay low, build the `GateController` around it
//! - Bind the listener and serve until Ctrl-C
//!
//! ## Dependency rule
//! Wiring only: no domain logic belongs here.

mod config;

use gatelink_adapter_tcp::GateServer;
use gatelink_adapter_virtual::{VirtualLink, VirtualOutput};
use gatelink_app::ports::DigitalOutput;
use gatelink_app::services::gate_controller::GateController;
use gatelink_app::services::startup;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Network
    let mut link = if config.network.available {
        VirtualLink::new(config.network.address, config.network.join_delay())
    } else {
        VirtualLink::unavailable(config.network.address)
    };
    startup::associate(&mut link, &config.network.settings()).await;

    // Relay
    let mut relay = VirtualOutput::new("relay", config.gate.relay_pin);
    relay.set(false)?;
    let controller = GateController::new(relay, config.gate.timings());

    // HTTP
    let server = GateServer::bind(&config.server_settings(), controller)?;
    server.serve(shutdown_signal()).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
