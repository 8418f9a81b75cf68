//! Time and timestamp helpers.
//!
//! Wall-clock timestamps are only used for reporting (sensor readings).
//! Cooldown and debounce decisions use monotonic instants or tick counts.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to sensor readings.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }
}
