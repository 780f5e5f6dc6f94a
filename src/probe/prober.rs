use super::config::ProbeConfig;
use super::report::{ProbeReport, to_millis};
use crate::{PingPongError, Result, net, payload};

use std::io;
use std::time::Instant;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, info};

/// UDP prober that measures round-trip time against an echo responder
///
/// Sends `count` fixed-size datagrams strictly one at a time, waits for each
/// reply before sending the next, and verifies that every reply byte is the
/// sent byte plus one.
///
/// # Examples
///
/// ```no_run
/// use pingpong::probe::{ProbeConfig, Prober};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ProbeConfig {
///         host: "localhost".to_string(),
///         port: 1266,
///         count: 3,
///         payload_size: 10,
///         buffer_size: 1024,
///         recv_timeout: Some(Duration::from_secs(1)),
///     };
///
///     let report = Prober::new(config).run().await?;
///     assert_eq!(report.errors, 0);
///     Ok(())
/// }
/// ```
pub struct Prober {
    config: ProbeConfig,
}

impl Prober {
    /// Creates a new prober with the given configuration
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Runs the full probe loop and returns the aggregate report.
    ///
    /// Resolution, bind, send, and receive failures are fatal and abort the
    /// run; a reply that fails verification only increments the report's
    /// error count.
    pub async fn run(&self) -> Result<ProbeReport> {
        let target = net::resolve_ipv4(&self.config.host, self.config.port).await?;

        // Ephemeral local port, picked by the OS.
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(PingPongError::Bind)?;

        info!(
            %target,
            count = self.config.count,
            payload_size = self.config.payload_size,
            "probing"
        );

        let probe = payload::filled(self.config.payload_size);
        let mut reply = vec![0u8; self.config.buffer_size];
        let mut report = ProbeReport {
            count: self.config.count,
            payload_size: self.config.payload_size,
            ..Default::default()
        };

        for i in 0..self.config.count {
            let start = Instant::now();

            let sent = socket
                .send_to(&probe, target)
                .await
                .map_err(PingPongError::Send)?;
            if sent != probe.len() {
                return Err(PingPongError::Send(io::Error::other(format!(
                    "short send: {sent} of {} bytes",
                    probe.len()
                ))));
            }

            let n = self.recv_reply(&socket, &mut reply).await?;
            let rtt = start.elapsed();

            if !payload::verify(&reply[..n], self.config.payload_size, payload::FILLER) {
                report.errors += 1;
                debug!(index = i, received = n, "reply failed verification");
            }

            println!("ping[{i}]: round-trip time: {:.3} ms", to_millis(rtt));

            report.total += rtt;
            report.samples.push(rtt);
        }

        Ok(report)
    }

    /// Waits for one reply datagram, honoring the configured deadline.
    async fn recv_reply(&self, socket: &UdpSocket, buf: &mut [u8]) -> Result<usize> {
        let (n, _from) = match self.config.recv_timeout {
            Some(limit) => timeout(limit, socket.recv_from(buf))
                .await
                .map_err(|_| PingPongError::Timeout(limit))?
                .map_err(PingPongError::Recv)?,
            None => socket.recv_from(buf).await.map_err(PingPongError::Recv)?,
        };
        Ok(n)
    }
}
