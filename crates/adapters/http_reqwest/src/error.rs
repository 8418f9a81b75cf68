//! HTTP client adapter error types.

use gatelink_domain::error::GatelinkError;

/// Errors specific to the outbound HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or no answer arrived in time.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Whether the failure was the request timeout firing.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Build(_) => false,
            Self::Request { source, .. } => source.is_timeout(),
        }
    }

    /// Convert into a [`GatelinkError::Transport`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> GatelinkError {
        GatelinkError::Transport(Box::new(self))
    }
}

impl From<ClientError> for GatelinkError {
    fn from(err: ClientError) -> Self {
        err.into_domain()
    }
}
