//! Telemetry backend port — home-automation state API.

use std::future::Future;

use gatelink_domain::error::GatelinkError;
use gatelink_domain::telemetry::StateUpdate;

/// Receives sensor state documents.
///
/// Both calls return the HTTP status code of the backend answer. Transport
/// failures are errors; non-200 answers are not.
pub trait TelemetryBackend {
    /// Check that the backend is reachable and the credentials are accepted.
    fn probe(&self) -> impl Future<Output = Result<u16, GatelinkError>> + Send;

    /// Replace the state of `entity_id`.
    fn push_state(
        &self,
        entity_id: &str,
        update: &StateUpdate,
    ) -> impl Future<Output = Result<u16, GatelinkError>> + Send;
}
