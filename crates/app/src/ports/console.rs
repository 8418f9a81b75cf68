//! Remote console port — maintenance shell started after association.

use gatelink_domain::error::GatelinkError;

/// A remote maintenance console.
pub trait RemoteConsole {
    /// Start the console. Failures are logged by the caller and ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the console cannot be started.
    fn start(&mut self, password: &str) -> Result<(), GatelinkError>;
}
