//! # buttond — button node daemon
//!
//! Composition root for the button node.
//!
//! ## Responsibilities
//! - Load configuration (`buttond.toml` + `GATELINK_*` env overrides)
//! - Install the tracing subscriber
//! - Join the network; when that works, start the console and probe the
//!   telemetry backend
//! - Feed button edges from stdin into the shared latch
//! - Run the `TriggerClient` loop until Ctrl-C
//!
//! ## Dependency rule
//! Wiring only: no domain logic belongs here.

mod button;
mod config;

use std::sync::Arc;

use gatelink_adapter_http_reqwest::{HomeAssistant, HttpTrigger};
use gatelink_adapter_virtual::{LogConsole, VirtualDht11, VirtualLink, VirtualOutput};
use gatelink_app::button_latch::ButtonLatch;
use gatelink_app::ports::DigitalOutput;
use gatelink_app::services::startup;
use gatelink_app::services::trigger_client::{ClientPorts, TriggerClient};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Peripherals
    let mut indicator = VirtualOutput::new("indicator", config.indicator.pin);
    indicator.set(false)?;
    let mut sensor = VirtualDht11::new(
        config.sensor.pin,
        config.sensor.base_temperature,
        config.sensor.base_humidity,
    );
    if config.sensor.fail_every > 0 {
        sensor = sensor.failing_every(config.sensor.fail_every);
    }
    let latch = Arc::new(ButtonLatch::new(config.button.debounce_ms));

    // Network
    let mut link = if config.network.available {
        VirtualLink::new(config.network.address, config.network.join_delay())
    } else {
        VirtualLink::unavailable(config.network.address)
    };
    let online = startup::associate(&mut link, &config.network.settings())
        .await
        .is_some();

    let transport = HttpTrigger::new(&config.trigger)?;
    let backend = HomeAssistant::new(&config.backend)?;
    if online {
        startup::start_console(&mut LogConsole::default(), &config.console.password);
        startup::probe_backend(&backend).await;
    }

    // Button
    let edges = Arc::clone(&latch);
    tracing::info!(pin = config.button.pin, "press Enter to push the button");
    tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        match button::feed_edges(stdin, &edges).await {
            Ok(accepted) => tracing::info!(accepted, "button input closed"),
            Err(err) => tracing::error!(error = %err, "button input failed"),
        }
    });

    let ports = ClientPorts {
        transport,
        indicator,
        sensor,
        backend,
    };
    tracing::info!(target_url = %config.trigger.target_url, "system ready");
    TriggerClient::new(latch, ports, online, config.timings())
        .run(shutdown_signal())
        .await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
