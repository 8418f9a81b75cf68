//! Gate controller — routes one request and enforces the relay cooldown.
//!
//! The controller owns the cooldown window and the relay output. It is driven
//! by a single task, one request at a time, so neither needs a lock. An
//! accepted `/open` restarts the window *before* pulsing the relay, which
//! means the pulse itself counts towards the cooldown.

use std::time::{Duration, Instant};

use gatelink_domain::cooldown::{CooldownState, CooldownWindow, DEFAULT_COOLDOWN, TriggerDecision};
use gatelink_domain::http::{RequestLine, Response, Route};
use gatelink_domain::relay::DEFAULT_PULSE;

use crate::ports::DigitalOutput;
use crate::pulse::pulse;

/// Timing knobs for the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateTimings {
    pub cooldown: Duration,
    pub pulse: Duration,
}

impl Default for GateTimings {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            pulse: DEFAULT_PULSE,
        }
    }
}

/// Application service behind the gate's HTTP endpoint.
pub struct GateController<R> {
    relay: R,
    cooldown: CooldownWindow,
    pulse: Duration,
}

impl<R: DigitalOutput> GateController<R> {
    /// Create a controller with an expired cooldown window.
    pub fn new(relay: R, timings: GateTimings) -> Self {
        Self {
            relay,
            cooldown: CooldownWindow::new(timings.cooldown),
            pulse: timings.pulse,
        }
    }

    /// The relay output, for inspection.
    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Current cooldown state at `now`.
    #[must_use]
    pub fn cooldown_state(&self, now: Instant) -> CooldownState {
        self.cooldown.state(now)
    }

    /// Answer one request received at `now`.
    ///
    /// For an accepted `/open` this awaits the whole relay pulse.
    pub async fn handle(&mut self, request: &RequestLine, now: Instant) -> Response {
        match request.route() {
            Route::Health => Response::health(),
            Route::Open => self.open(now).await,
            Route::NotFound => {
                tracing::debug!(method = %request.method, path = %request.path, "unknown endpoint");
                Response::not_found()
            }
        }
    }

    async fn open(&mut self, now: Instant) -> Response {
        match self.cooldown.try_trigger(now) {
            TriggerDecision::Accepted => {
                tracing::info!(pulse = ?self.pulse, "relay signal");
                if let Err(err) = pulse(&mut self.relay, self.pulse).await {
                    tracing::error!(error = %err, "relay pulse failed");
                }
                Response::opened()
            }
            TriggerDecision::Rejected { remaining } => {
                tracing::info!(remaining = ?remaining, "trigger rejected, cooldown active");
                Response::cooling_down(remaining)
            }
        }
    }
}
