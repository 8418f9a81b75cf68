//! End-to-end tests for the button node against a live gate.
//!
//! A gate server runs on a loopback port with a virtual relay; the trigger
//! client talks to it over real HTTP. Ticks are driven by hand so each test
//! controls exactly when presses are consumed.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use gatelink_adapter_http_reqwest::{BackendConfig, HomeAssistant, HttpTrigger, TriggerConfig};
use gatelink_adapter_tcp::{GateServer, ServerSettings};
use gatelink_adapter_virtual::{OutputProbe, VirtualDht11, VirtualOutput};
use gatelink_app::button_latch::ButtonLatch;
use gatelink_app::services::gate_controller::{GateController, GateTimings};
use gatelink_app::services::trigger_client::{
    ClientPorts, ClientTimings, DispatchOutcome, TelemetryOutcome, TriggerClient,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

type Client = TriggerClient<HttpTrigger, VirtualOutput, VirtualDht11, HomeAssistant>;

struct Node {
    latch: Arc<ButtonLatch>,
    client: Client,
    indicator: OutputProbe,
}

fn start_gate() -> (SocketAddr, OutputProbe, oneshot::Sender<()>) {
    let relay = VirtualOutput::new("relay", 10);
    let probe = relay.probe();
    let controller = GateController::new(
        relay,
        GateTimings {
            cooldown: Duration::from_secs(5),
            pulse: Duration::from_millis(20),
        },
    );
    let settings = ServerSettings {
        bind: "127.0.0.1:0".to_string(),
        backlog: 2,
        read_timeout: Duration::from_secs(2),
    };
    let server = GateServer::bind(&settings, controller).unwrap();
    let addr = server.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(server.serve(async {
        let _ = rx.await;
    }));
    (addr, probe, tx)
}

async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn node(gate: SocketAddr, online: bool, telemetry_every: u32) -> Node {
    let transport = HttpTrigger::new(&TriggerConfig {
        target_url: format!("http://{gate}/open"),
        timeout_ms: 2_000,
    })
    .unwrap();
    let backend = HomeAssistant::new(&BackendConfig {
        url: format!("http://{}", closed_port().await),
        token: "token".to_string(),
        timeout_ms: 500,
    })
    .unwrap();
    let indicator = VirtualOutput::new("indicator", 2);
    let probe = indicator.probe();
    let latch = Arc::new(ButtonLatch::default());
    let ports = ClientPorts {
        transport,
        indicator,
        sensor: VirtualDht11::new(10, 21, 45),
        backend,
    };
    let timings = ClientTimings {
        tick: Duration::from_millis(10),
        telemetry_every,
        feedback: Duration::from_millis(20),
    };
    Node {
        latch: Arc::clone(&latch),
        client: TriggerClient::new(latch, ports, online, timings),
        indicator: probe,
    }
}

#[tokio::test]
async fn should_open_gate_and_flash_indicator_on_press() {
    let (gate, relay, _stop) = start_gate();
    let mut node = node(gate, true, 1_000).await;

    node.latch.on_edge(1_000);
    let report = node.client.tick().await;

    assert_eq!(report.dispatch, Some(DispatchOutcome::Opened));
    assert_eq!(relay.pulses(), 1);
    assert_eq!(node.indicator.pulses(), 1);
    assert!(!relay.state().is_energized());
    assert!(!node.indicator.state().is_energized());
}

#[tokio::test]
async fn should_be_refused_while_gate_cools_down() {
    let (gate, relay, _stop) = start_gate();
    let mut node = node(gate, true, 1_000).await;

    node.latch.on_edge(1_000);
    node.client.tick().await;
    node.latch.on_edge(1_400);
    let report = node.client.tick().await;

    assert_eq!(
        report.dispatch,
        Some(DispatchOutcome::Refused { status: 429 })
    );
    assert_eq!(relay.pulses(), 1);
    assert_eq!(node.indicator.pulses(), 1);
}

#[tokio::test]
async fn should_send_single_request_for_bouncing_press() {
    let (gate, relay, _stop) = start_gate();
    let mut node = node(gate, true, 1_000).await;

    for at_ms in (0..40u64).map(|i| 5_000 + i * 5) {
        node.latch.on_edge(at_ms);
    }
    let first = node.client.tick().await;
    let second = node.client.tick().await;

    assert_eq!(first.dispatch, Some(DispatchOutcome::Opened));
    assert_eq!(second.dispatch, None);
    assert_eq!(relay.pulses(), 1);
}

#[tokio::test]
async fn should_not_contact_gate_when_offline() {
    let (gate, relay, _stop) = start_gate();
    let mut node = node(gate, false, 1_000).await;

    node.latch.on_edge(1_000);
    let report = node.client.tick().await;

    assert_eq!(report.dispatch, Some(DispatchOutcome::Offline));
    assert_eq!(relay.pulses(), 0);
    assert!(node.indicator.levels().is_empty());
}

#[tokio::test]
async fn should_report_failure_when_gate_unreachable() {
    let mut node = node(closed_port().await, true, 1_000).await;

    node.latch.on_edge(1_000);
    let report = node.client.tick().await;

    assert_eq!(report.dispatch, Some(DispatchOutcome::Failed));
    assert!(node.indicator.levels().is_empty());
}

#[tokio::test]
async fn should_keep_dispatching_when_backend_unreachable() {
    let (gate, relay, _stop) = start_gate();
    let mut node = node(gate, true, 1).await;

    node.latch.on_edge(1_000);
    let report = node.client.tick().await;

    assert_eq!(report.dispatch, Some(DispatchOutcome::Opened));
    assert_eq!(report.telemetry, Some(TelemetryOutcome::Failed));
    assert_eq!(relay.pulses(), 1);
}

#[tokio::test]
async fn should_consume_presses_from_run_loop() {
    let (gate, relay, _stop) = start_gate();
    let node = node(gate, true, 1_000).await;
    let latch = Arc::clone(&node.latch);

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(node.client.run(async {
        let _ = rx.await;
    }));

    latch.on_edge(1_000);
    tokio::time::timeout(Duration::from_secs(5), async {
        while relay.pulses() == 0 || latch.is_pending() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("press should reach the gate");

    tx.send(()).unwrap();
    handle.await.unwrap();
    assert_eq!(relay.pulses(), 1);
}
