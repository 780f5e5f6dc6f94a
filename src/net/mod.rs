//! Address resolution helpers shared by the prober and the responder

use crate::{PingPongError, Result};
use std::net::SocketAddr;
use tokio::net::lookup_host;
use tracing::debug;

/// Resolves `host:port` to the first IPv4 address the resolver yields.
///
/// Both programs speak IPv4 UDP; candidates from other address families are
/// skipped rather than failing resolution outright.
pub async fn resolve_ipv4(host: &str, port: u16) -> Result<SocketAddr> {
    let addr = lookup_host((host, port))
        .await
        .map_err(PingPongError::Resolve)?
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| PingPongError::NoAddress(format!("{host}:{port}")))?;
    debug!(%host, port, %addr, "resolved address");
    Ok(addr)
}
