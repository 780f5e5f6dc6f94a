use std::time::Duration;
use thiserror::Error;

/// Error types for the pingpong library
///
/// Every fatal condition carries the system operation it came from, so the
/// top-level caller can report which step failed before terminating.
#[derive(Error, Debug)]
pub enum PingPongError {
    /// Address resolution failed outright
    #[error("address resolution error: {0}")]
    Resolve(std::io::Error),

    /// Resolution succeeded but produced no usable IPv4 address
    #[error("no IPv4 address found for {0}")]
    NoAddress(String),

    /// Socket creation or bind failed
    #[error("socket bind error: {0}")]
    Bind(std::io::Error),

    /// Datagram transmission failed, including short sends
    #[error("send error: {0}")]
    Send(std::io::Error),

    /// Datagram reception failed
    #[error("receive error: {0}")]
    Recv(std::io::Error),

    /// The configured receive deadline expired with no reply
    #[error("receive timed out after {0:?}")]
    Timeout(Duration),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the pingpong library
pub type Result<T> = std::result::Result<T, PingPongError>;

pub mod net;
pub mod payload;
pub mod probe;
pub mod responder;

// Re-export main types for convenience
pub use probe::{ProbeConfig, ProbeReport, Prober};
pub use responder::{EchoResponder, ResponderConfig};
