//! Sequential accept loop.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use gatelink_app::ports::DigitalOutput;
use gatelink_app::services::gate_controller::GateController;
use gatelink_domain::http::RequestLine;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpSocket, TcpStream};

use crate::error::ServerError;
use crate::framing::{encode_response, read_request};

/// Listener settings.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// `host:port` to bind.
    pub bind: String,
    /// Pending-connection queue length handed to `listen`.
    pub backlog: u32,
    /// Maximum wait for the request bytes of one connection.
    pub read_timeout: Duration,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:80".to_string(),
            backlog: 2,
            read_timeout: Duration::from_secs(5),
        }
    }
}

/// The gate controller bound to a TCP listener.
pub struct GateServer<R> {
    listener: TcpListener,
    controller: GateController<R>,
    read_timeout: Duration,
}

impl<R: DigitalOutput> GateServer<R> {
    /// Bind the listener with address reuse enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidAddress`] for an unparsable bind address
    /// or [`ServerError::Io`] if the socket cannot be set up.
    pub fn bind(
        settings: &ServerSettings,
        controller: GateController<R>,
    ) -> Result<Self, ServerError> {
        let addr: SocketAddr = settings
            .bind
            .parse()
            .map_err(|_| ServerError::InvalidAddress(settings.bind.clone()))?;
        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(settings.backlog)?;
        tracing::info!(addr = %listener.local_addr()?, "HTTP server is listening");

        Ok(Self {
            listener,
            controller,
            read_timeout: settings.read_timeout,
        })
    }

    /// Address the listener is bound to.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if the socket has no local address.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve connections one by one until `shutdown` resolves.
    ///
    /// A connection that is being handled completes before shutdown is
    /// observed. Per-connection failures are logged and never end the loop.
    pub async fn serve(mut self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                () = &mut shutdown => {
                    tracing::info!("stopped");
                    break;
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => self.serve_connection(stream, peer).await,
                    Err(err) => tracing::warn!(error = %err, "accept failed"),
                },
            }
        }
    }

    async fn serve_connection(&mut self, mut stream: TcpStream, peer: SocketAddr) {
        if let Err(err) = self.exchange(&mut stream, peer).await {
            tracing::warn!(%peer, error = %err, "request error");
        }
        // Dropping the stream closes the socket whichever branch ran.
    }

    async fn exchange(
        &mut self,
        stream: &mut TcpStream,
        peer: SocketAddr,
    ) -> Result<(), ServerError> {
        let Some(raw) = read_request(stream, self.read_timeout).await? else {
            tracing::debug!(%peer, "empty request, closing");
            return Ok(());
        };

        let request = RequestLine::parse(&raw);
        let response = self
            .controller
            .handle(&request, tokio::time::Instant::now().into_std())
            .await;
        tracing::info!(
            %peer,
            method = %request.method,
            path = %request.path,
            status = response.status.code(),
            "request served"
        );

        stream.write_all(&encode_response(&response)).await?;
        stream.shutdown().await?;
        Ok(())
    }
}
