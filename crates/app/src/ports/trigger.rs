//! Trigger transport port — the outbound call to the gate controller.

use std::future::Future;

use gatelink_domain::error::GatelinkError;

/// Asks the gate to open.
pub trait TriggerTransport {
    /// Issue one open request and return the status code of the answer.
    fn send_open(&self) -> impl Future<Output = Result<u16, GatelinkError>> + Send;
}
