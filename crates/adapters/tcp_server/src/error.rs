//! TCP adapter error types.

use std::time::Duration;

use gatelink_domain::error::GatelinkError;

/// Errors specific to the gate HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured bind address is not a socket address.
    #[error("invalid bind address {0:?}")]
    InvalidAddress(String),

    /// Socket setup, accept, read or write failed.
    #[error("socket error")]
    Io(#[from] std::io::Error),

    /// The peer sent nothing within the read timeout.
    #[error("no request received within {0:?}")]
    ReadTimeout(Duration),
}

impl ServerError {
    /// Convert into a [`GatelinkError::Transport`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> GatelinkError {
        GatelinkError::Transport(Box::new(self))
    }
}

impl From<ServerError> for GatelinkError {
    fn from(err: ServerError) -> Self {
        err.into_domain()
    }
}
