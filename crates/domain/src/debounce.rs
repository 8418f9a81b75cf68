//! Debounce rule for the push button.
//!
//! Times are millisecond tick counts from a monotonic source. An edge is
//! accepted only when strictly more than the threshold has passed since the
//! previously *accepted* edge; rejected edges never move the window.

/// Minimum spacing between two accepted button edges, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// A button edge that made it through the debounce filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    /// Tick count (ms) at which the edge was observed.
    pub at_ms: u64,
}

/// Whether an edge at `now_ms` clears the window opened at `last_accepted_ms`.
///
/// A clock reading behind the last accepted edge never clears the window.
#[must_use]
pub fn clears_window(last_accepted_ms: u64, now_ms: u64, threshold_ms: u64) -> bool {
    now_ms.saturating_sub(last_accepted_ms) > threshold_ms
}
