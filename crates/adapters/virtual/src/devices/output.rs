//! Virtual output pin — stands in for the relay coil and the indicator LED.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gatelink_app::ports::DigitalOutput;
use gatelink_domain::error::OutputError;
use gatelink_domain::relay::RelayState;

/// A simulated push-pull output that remembers every level written to it.
pub struct VirtualOutput {
    label: &'static str,
    pin: u8,
    levels: Arc<Mutex<Vec<bool>>>,
}

/// Read-only view of a [`VirtualOutput`] that survives moving the output
/// into a service.
#[derive(Clone)]
pub struct OutputProbe {
    levels: Arc<Mutex<Vec<bool>>>,
}

impl VirtualOutput {
    /// Create a low output; `label` only shows up in logs.
    #[must_use]
    pub fn new(label: &'static str, pin: u8) -> Self {
        Self {
            label,
            pin,
            levels: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A probe observing this output.
    #[must_use]
    pub fn probe(&self) -> OutputProbe {
        OutputProbe {
            levels: Arc::clone(&self.levels),
        }
    }
}

impl DigitalOutput for VirtualOutput {
    fn set(&mut self, high: bool) -> Result<(), OutputError> {
        lock(&self.levels).push(high);
        let state = if high {
            RelayState::Energized
        } else {
            RelayState::Idle
        };
        tracing::debug!(label = self.label, pin = self.pin, %state, "output set");
        Ok(())
    }
}

impl OutputProbe {
    /// Level currently driven, as a relay state.
    #[must_use]
    pub fn state(&self) -> RelayState {
        if lock(&self.levels).last().copied().unwrap_or(false) {
            RelayState::Energized
        } else {
            RelayState::Idle
        }
    }

    /// Number of complete high→low cycles so far.
    #[must_use]
    pub fn pulses(&self) -> usize {
        lock(&self.levels)
            .windows(2)
            .filter(|pair| pair[0] && !pair[1])
            .count()
    }

    /// Every level written, oldest first.
    #[must_use]
    pub fn levels(&self) -> Vec<bool> {
        lock(&self.levels).clone()
    }
}

fn lock(levels: &Mutex<Vec<bool>>) -> MutexGuard<'_, Vec<bool>> {
    levels.lock().unwrap_or_else(PoisonError::into_inner)
}
