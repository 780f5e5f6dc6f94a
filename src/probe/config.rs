use std::time::Duration;

/// Prober configuration
///
/// Constructed once at startup and immutable for the run.
///
/// # Examples
///
/// ```
/// use pingpong::probe::ProbeConfig;
/// use std::time::Duration;
///
/// let config = ProbeConfig {
///     host: "localhost".to_string(),
///     port: 1266,
///     count: 3,
///     payload_size: 10,
///     buffer_size: 1024,
///     recv_timeout: Some(Duration::from_millis(500)),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Host running the echo responder
    pub host: String,
    /// Port the echo responder listens on
    pub port: u16,
    /// Number of probe packets to send
    pub count: usize,
    /// Size of each outgoing payload in bytes
    pub payload_size: usize,
    /// Receive buffer size; replies longer than this are truncated by the OS
    pub buffer_size: usize,
    /// Deadline for each reply, or `None` to block indefinitely
    pub recv_timeout: Option<Duration>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1266,
            count: 1,
            payload_size: 100,
            buffer_size: 1024,
            recv_timeout: None,
        }
    }
}
