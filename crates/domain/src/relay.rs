//! Relay coil state and pulse timing.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the coil stays energized for one gate pulse.
pub const DEFAULT_PULSE: Duration = Duration::from_millis(400);

/// Level of the relay coil.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayState {
    /// Coil released. The only state the relay rests in between requests.
    #[default]
    Idle,
    /// Coil pulled in; the gate motor sees a contact closure.
    Energized,
}

impl RelayState {
    #[must_use]
    pub fn is_energized(self) -> bool {
        self == Self::Energized
    }

    /// Output level that produces this state on an active-high driver.
    #[must_use]
    pub fn level(self) -> bool {
        self.is_energized()
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Energized => f.write_str("energized"),
        }
    }
}
