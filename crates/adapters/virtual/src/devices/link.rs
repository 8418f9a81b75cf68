//! Virtual network link — association that succeeds after a delay, or never.

use std::net::IpAddr;
use std::time::Duration;

use gatelink_app::ports::{Association, NetworkLink};
use gatelink_domain::error::{GatelinkError, NetworkError};
use tokio::time::Instant;

/// Interval between two association status checks.
const POLL: Duration = Duration::from_millis(250);

/// A simulated station-mode link.
pub struct VirtualLink {
    address: IpAddr,
    available: bool,
    join_delay: Duration,
}

impl VirtualLink {
    /// A link that associates after `join_delay` and reports `address`.
    #[must_use]
    pub fn new(address: IpAddr, join_delay: Duration) -> Self {
        Self {
            address,
            available: true,
            join_delay,
        }
    }

    /// A link whose access point never answers.
    #[must_use]
    pub fn unavailable(address: IpAddr) -> Self {
        Self {
            address,
            available: false,
            join_delay: Duration::ZERO,
        }
    }
}

impl NetworkLink for VirtualLink {
    async fn associate(
        &mut self,
        ssid: &str,
        _password: &str,
        timeout: Duration,
    ) -> Result<Association, GatelinkError> {
        let started = Instant::now();
        loop {
            let elapsed = started.elapsed();
            if self.available && elapsed >= self.join_delay {
                return Ok(Association {
                    ssid: ssid.to_string(),
                    address: self.address,
                });
            }
            if elapsed > timeout {
                return Err(NetworkError::Timeout {
                    ssid: ssid.to_string(),
                    timeout_secs: timeout.as_secs(),
                }
                .into());
            }
            tokio::time::sleep(POLL).await;
        }
    }
}
