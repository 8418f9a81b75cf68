//! Trigger client — turns debounced button presses into `/open` calls.
//!
//! The loop ticks at a fixed period. On each tick it consumes at most one
//! pending press from the [`ButtonLatch`] and dispatches it; every
//! `telemetry_every` ticks it also reads the climate sensor and pushes the
//! reading. Both jobs run inline and to completion, so a slow call delays
//! the next poll but cannot lose a press: the latch keeps it pending.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use crate::button_latch::ButtonLatch;
use crate::ports::{ClimateSensor, DigitalOutput, TelemetryBackend, TriggerTransport};
use crate::pulse::pulse;

/// Loop period.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);
/// Ticks between two telemetry cycles (~10 s at the default period).
pub const DEFAULT_TELEMETRY_EVERY: u32 = 100;
/// Indicator pulse after a successful trigger.
pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(200);

/// Timing knobs for the client loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimings {
    pub tick: Duration,
    pub telemetry_every: u32,
    pub feedback: Duration,
}

impl Default for ClientTimings {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            telemetry_every: DEFAULT_TELEMETRY_EVERY,
            feedback: DEFAULT_FEEDBACK,
        }
    }
}

/// What happened to a consumed button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The gate answered `200`.
    Opened,
    /// The gate answered with another status (cooldown, unknown path, …).
    Refused { status: u16 },
    /// The request could not be completed.
    Failed,
    /// No network; the press was consumed without sending anything.
    Offline,
}

/// What happened in a telemetry cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryOutcome {
    /// Every state update was answered with `200`.
    Pushed,
    /// At least one update was answered with another status.
    Rejected,
    /// A push could not be completed.
    Failed,
    /// The sensor produced no reading; nothing was sent.
    NoReading,
    /// A reading was taken but there is no network to send it on.
    Offline,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub dispatch: Option<DispatchOutcome>,
    pub telemetry: Option<TelemetryOutcome>,
}

/// Collaborators of the client loop.
pub struct ClientPorts<T, L, S, B> {
    pub transport: T,
    pub indicator: L,
    pub sensor: S,
    pub backend: B,
}

/// Application service driving the button node.
pub struct TriggerClient<T, L, S, B> {
    latch: Arc<ButtonLatch>,
    ports: ClientPorts<T, L, S, B>,
    online: bool,
    timings: ClientTimings,
    ticks: u32,
}

impl<T, L, S, B> TriggerClient<T, L, S, B>
where
    T: TriggerTransport,
    L: DigitalOutput,
    S: ClimateSensor,
    B: TelemetryBackend,
{
    /// Create a client fed by `latch`.
    ///
    /// `online` is the association result at startup; it never changes.
    pub fn new(
        latch: Arc<ButtonLatch>,
        ports: ClientPorts<T, L, S, B>,
        online: bool,
        timings: ClientTimings,
    ) -> Self {
        Self {
            latch,
            ports,
            online,
            timings,
            ticks: 0,
        }
    }

    /// The collaborators, for inspection.
    pub fn ports(&self) -> &ClientPorts<T, L, S, B> {
        &self.ports
    }

    /// Run one loop iteration (the part after the tick sleep).
    pub async fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        self.ticks += 1;

        if let Some(event) = self.latch.take() {
            tracing::info!(at_ms = event.at_ms, "button pressed, sending open request");
            report.dispatch = Some(self.dispatch().await);
        }

        if self.ticks >= self.timings.telemetry_every {
            self.ticks = 0;
            report.telemetry = Some(self.telemetry().await);
        }

        report
    }

    /// Tick every period until `shutdown` resolves.
    ///
    /// A tick that is already running completes before shutdown is observed.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) {
        let mut interval =
            tokio::time::interval_at(Instant::now() + self.timings.tick, self.timings.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    tracing::info!("stopped");
                    break;
                }
                _ = interval.tick() => {
                    self.tick().await;
                }
            }
        }
    }

    async fn dispatch(&mut self) -> DispatchOutcome {
        if !self.online {
            tracing::warn!("no network connection, cannot send request");
            return DispatchOutcome::Offline;
        }

        let outcome = match self.ports.transport.send_open().await {
            Ok(200) => DispatchOutcome::Opened,
            Ok(status) => DispatchOutcome::Refused { status },
            Err(err) => {
                tracing::warn!(error = %err, "open request failed");
                DispatchOutcome::Failed
            }
        };

        if outcome == DispatchOutcome::Opened {
            if let Err(err) = pulse(&mut self.ports.indicator, self.timings.feedback).await {
                tracing::warn!(error = %err, "indicator pulse failed");
            }
            tracing::info!("task completed: success");
        } else {
            tracing::info!(?outcome, "task completed: fail");
        }
        outcome
    }

    async fn telemetry(&mut self) -> TelemetryOutcome {
        let reading = match self.ports.sensor.measure().await {
            Ok(reading) => reading,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read climate sensor");
                return TelemetryOutcome::NoReading;
            }
        };
        tracing::info!(
            temperature = reading.temperature,
            humidity = reading.humidity,
            measured_at = %reading.measured_at,
            "climate reading"
        );

        if !self.online {
            return TelemetryOutcome::Offline;
        }

        let mut outcome = TelemetryOutcome::Pushed;
        for (entity_id, update) in reading.state_updates() {
            match self.ports.backend.push_state(entity_id, &update).await {
                Ok(200) => {}
                Ok(status) => {
                    tracing::warn!(entity_id, status, "backend rejected state update");
                    outcome = TelemetryOutcome::Rejected;
                }
                Err(err) => {
                    tracing::warn!(entity_id, error = %err, "error sending climate data");
                    return TelemetryOutcome::Failed;
                }
            }
        }
        tracing::debug!(?outcome, "climate data sent");
        outcome
    }
}
