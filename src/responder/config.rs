use std::time::Duration;

/// Echo responder configuration
///
/// # Examples
///
/// ```
/// use pingpong::responder::ResponderConfig;
///
/// let config = ResponderConfig {
///     host: "0.0.0.0".to_string(),
///     port: 1266,
///     count: 3,
///     buffer_size: 1024,
///     recv_timeout: None,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    /// Address to bind to; the default wildcard accepts probes on any interface
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Number of datagrams to serve before exiting
    pub count: usize,
    /// Receive buffer size; larger datagrams are truncated by the OS
    pub buffer_size: usize,
    /// Deadline for each incoming datagram, or `None` to block indefinitely
    pub recv_timeout: Option<Duration>,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 1266,
            count: 1,
            buffer_size: 1024,
            recv_timeout: None,
        }
    }
}
