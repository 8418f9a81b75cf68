//! Cooldown window: the minimum spacing between two accepted gate triggers.
//!
//! The window has no timer of its own. Every trigger attempt re-evaluates the
//! time elapsed since the last accepted trigger; the window decays back to
//! [`CooldownState::Ready`] as the clock advances past its duration.

use std::time::{Duration, Instant};

/// Cooldown applied after every accepted trigger.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5);

/// Observable state of a [`CooldownWindow`] at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    /// A trigger would be accepted.
    Ready,
    /// A trigger would be rejected for `remaining` more time.
    Cooling {
        /// Time left until the window expires.
        remaining: Duration,
    },
}

/// Outcome of a trigger attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerDecision {
    /// The window was ready and has been restarted at the attempt instant.
    Accepted,
    /// The window is still cooling; nothing changed.
    Rejected {
        /// Time left until the window expires.
        remaining: Duration,
    },
}

/// Start instant and length of the current cooldown.
///
/// A fresh window has never been started and is therefore expired.
#[derive(Debug, Clone)]
pub struct CooldownWindow {
    start: Option<Instant>,
    duration: Duration,
}

impl Default for CooldownWindow {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl CooldownWindow {
    /// Create an expired window of the given length.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            start: None,
            duration,
        }
    }

    /// Instant of the last accepted trigger, if any.
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.start
    }

    /// Evaluate the window at `now` without changing it.
    ///
    /// Elapsed time exactly equal to the duration counts as expired.
    #[must_use]
    pub fn state(&self, now: Instant) -> CooldownState {
        let Some(start) = self.start else {
            return CooldownState::Ready;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.duration {
            CooldownState::Cooling {
                remaining: self.duration - elapsed,
            }
        } else {
            CooldownState::Ready
        }
    }

    /// Attempt a trigger at `now`, restarting the window when it is ready.
    pub fn try_trigger(&mut self, now: Instant) -> TriggerDecision {
        match self.state(now) {
            CooldownState::Ready => {
                self.start = Some(now);
                TriggerDecision::Accepted
            }
            CooldownState::Cooling { remaining } => TriggerDecision::Rejected { remaining },
        }
    }
}
