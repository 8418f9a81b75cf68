//! Startup helpers shared by both nodes.
//!
//! Every step degrades instead of failing: a missing network, a console that
//! will not start or an unreachable backend are logged and the node carries on.

use std::time::Duration;

use crate::ports::{Association, NetworkLink, RemoteConsole, TelemetryBackend};

/// Credentials and limits for joining the network.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    pub ssid: String,
    pub password: String,
    pub timeout: Duration,
}

/// Join the network, returning `None` (after logging) when association fails.
pub async fn associate<L: NetworkLink>(
    link: &mut L,
    settings: &LinkSettings,
) -> Option<Association> {
    tracing::info!(ssid = %settings.ssid, "connecting to network");
    match link
        .associate(&settings.ssid, &settings.password, settings.timeout)
        .await
    {
        Ok(association) => {
            tracing::info!(
                ssid = %association.ssid,
                address = %association.address,
                "network connected"
            );
            Some(association)
        }
        Err(err) => {
            tracing::warn!(error = %err, "network connection failed, continuing offline");
            None
        }
    }
}

/// Start the remote console; failures are logged and ignored.
pub fn start_console<C: RemoteConsole>(console: &mut C, password: &str) {
    match console.start(password) {
        Ok(()) => tracing::info!("remote console started"),
        Err(err) => tracing::warn!(error = %err, "remote console failed"),
    }
}

/// Check the telemetry backend, returning whether it answered `200`.
pub async fn probe_backend<B: TelemetryBackend>(backend: &B) -> bool {
    match backend.probe().await {
        Ok(200) => {
            tracing::info!("backend connection OK");
            true
        }
        Ok(status) => {
            tracing::warn!(status, "backend connection failed");
            false
        }
        Err(err) => {
            tracing::warn!(error = %err, "backend connection failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use gatelink_domain::error::{GatelinkError, NetworkError};
    use gatelink_domain::telemetry::StateUpdate;

    use super::*;

    struct FixedLink(bool);

    impl NetworkLink for FixedLink {
        async fn associate(
            &mut self,
            ssid: &str,
            _password: &str,
            timeout: Duration,
        ) -> Result<Association, GatelinkError> {
            if self.0 {
                Ok(Association {
                    ssid: ssid.to_string(),
                    address: IpAddr::V4(Ipv4Addr::new(192, 168, 1, 40)),
                })
            } else {
                Err(NetworkError::Timeout {
                    ssid: ssid.to_string(),
                    timeout_secs: timeout.as_secs(),
                }
                .into())
            }
        }
    }

    struct BrokenConsole;

    impl RemoteConsole for BrokenConsole {
        fn start(&mut self, _password: &str) -> Result<(), GatelinkError> {
            Err(NetworkError::NotAssociated.into())
        }
    }

    struct StatusBackend(u16);

    impl TelemetryBackend for StatusBackend {
        async fn probe(&self) -> Result<u16, GatelinkError> {
            Ok(self.0)
        }

        async fn push_state(
            &self,
            _entity_id: &str,
            _update: &StateUpdate,
        ) -> Result<u16, GatelinkError> {
            Ok(self.0)
        }
    }

    fn settings() -> LinkSettings {
        LinkSettings {
            ssid: "home".to_string(),
            password: "secret".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    #[tokio::test]
    async fn should_return_association_when_link_comes_up() {
        let association = associate(&mut FixedLink(true), &settings()).await.unwrap();
        assert_eq!(association.ssid, "home");
    }

    #[tokio::test]
    async fn should_degrade_to_none_when_link_fails() {
        assert!(associate(&mut FixedLink(false), &settings()).await.is_none());
    }

    #[test]
    fn should_swallow_console_failure() {
        start_console(&mut BrokenConsole, "pw");
    }

    #[tokio::test]
    async fn should_report_probe_status() {
        assert!(probe_backend(&StatusBackend(200)).await);
        assert!(!probe_backend(&StatusBackend(401)).await);
    }
}
