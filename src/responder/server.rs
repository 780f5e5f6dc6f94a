use super::config::ResponderConfig;
use crate::{PingPongError, Result, net, payload};

use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, info};

/// UDP echo responder
///
/// Serves a fixed number of datagrams strictly one at a time, in receive
/// order: each received payload has every byte incremented by one (wrapping)
/// and is sent back to its sender at the exact received length.
///
/// # Examples
///
/// Serving a fixed budget of probes:
///
/// ```no_run
/// use pingpong::responder::{EchoResponder, ResponderConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ResponderConfig {
///         port: 1266,
///         count: 3,
///         ..Default::default()
///     };
///     EchoResponder::run(config).await?;
///     Ok(())
/// }
/// ```
///
/// Binding first to learn the port, as tests do:
///
/// ```no_run
/// use pingpong::responder::{EchoResponder, ResponderConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ResponderConfig {
///         port: 0,
///         ..Default::default()
///     };
///     let responder = EchoResponder::bind(config).await?;
///     let addr = responder.local_addr()?;
///     println!("listening on {addr}");
///     responder.serve().await?;
///     Ok(())
/// }
/// ```
pub struct EchoResponder {
    config: ResponderConfig,
    socket: UdpSocket,
}

impl EchoResponder {
    /// Resolves the configured bind address and binds the UDP socket
    pub async fn bind(config: ResponderConfig) -> Result<Self> {
        let bind_addr = net::resolve_ipv4(&config.host, config.port).await?;
        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(PingPongError::Bind)?;
        Ok(Self { config, socket })
    }

    /// The address the socket is actually bound to.
    ///
    /// With port 0 in the configuration this is how callers learn the port
    /// the OS picked.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr().map_err(PingPongError::Bind)
    }

    /// Serves exactly `count` datagrams, then returns.
    ///
    /// Each datagram is returned to its sender with every byte incremented.
    /// Any receive or send failure aborts the loop with a typed error.
    pub async fn serve(&self) -> Result<()> {
        info!(
            address = %self.local_addr()?,
            count = self.config.count,
            "echo responder listening"
        );

        let mut buffer = vec![0u8; self.config.buffer_size];

        for i in 0..self.config.count {
            let (n, sender) = self.recv_datagram(&mut buffer).await?;

            println!("pong[{i}]: received packet from {}", sender.ip());
            debug!(%sender, size = n, "received datagram");

            payload::increment(&mut buffer[..n]);

            let sent = self
                .socket
                .send_to(&buffer[..n], sender)
                .await
                .map_err(PingPongError::Send)?;
            if sent != n {
                return Err(PingPongError::Send(io::Error::other(format!(
                    "short send: {sent} of {n} bytes"
                ))));
            }
        }

        info!("echo responder done");
        Ok(())
    }

    /// Binds and serves in one call
    pub async fn run(config: ResponderConfig) -> Result<()> {
        Self::bind(config).await?.serve().await
    }

    /// Waits for one datagram, honoring the configured deadline.
    async fn recv_datagram(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr)> {
        match self.config.recv_timeout {
            Some(limit) => timeout(limit, self.socket.recv_from(buf))
                .await
                .map_err(|_| PingPongError::Timeout(limit))?
                .map_err(PingPongError::Recv),
            None => self.socket.recv_from(buf).await.map_err(PingPongError::Recv),
        }
    }
}
