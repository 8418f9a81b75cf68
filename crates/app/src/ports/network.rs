//! Network link port — station-mode association.

use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;

use gatelink_domain::error::GatelinkError;

/// Result of a successful association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub ssid: String,
    /// Address assigned to this node.
    pub address: IpAddr,
}

/// Joins the local network.
///
/// Callers treat failure as degraded operation, never as fatal: the gate
/// still serves and the button client skips dispatch. There is no automatic
/// reconnection.
pub trait NetworkLink {
    /// Associate with `ssid`, giving up after `timeout`.
    fn associate(
        &mut self,
        ssid: &str,
        password: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<Association, GatelinkError>> + Send;
}
