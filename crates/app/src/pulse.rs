//! Timed pulses on a digital output.
//!
//! A pulse drives the output high, holds it for a fixed time, then drives it
//! low again before returning. The caller awaits the whole pulse. If the
//! future is dropped while holding, a guard drives the output low so the
//! relay can never stay energized past the operation that pulled it in.

use std::time::Duration;

use gatelink_domain::error::OutputError;
use gatelink_domain::relay::RelayState;

use crate::ports::DigitalOutput;

struct ReleaseOnDrop<'a, O: DigitalOutput> {
    output: &'a mut O,
    armed: bool,
}

impl<O: DigitalOutput> ReleaseOnDrop<'_, O> {
    fn release(mut self) -> Result<(), OutputError> {
        self.armed = false;
        self.output.set(RelayState::Idle.level())
    }
}

impl<O: DigitalOutput> Drop for ReleaseOnDrop<'_, O> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(err) = self.output.set(RelayState::Idle.level()) {
                tracing::error!(error = %err, "failed to release output after interrupted pulse");
            }
        }
    }
}

/// Drive `output` high for `hold`, then low.
///
/// # Errors
///
/// Returns [`OutputError`] if either edge cannot be driven. When the rising
/// edge fails the output is still driven low before returning.
pub async fn pulse<O: DigitalOutput>(output: &mut O, hold: Duration) -> Result<(), OutputError> {
    let guard = ReleaseOnDrop {
        output,
        armed: true,
    };
    guard.output.set(RelayState::Energized.level())?;
    tokio::time::sleep(hold).await;
    guard.release()
}
