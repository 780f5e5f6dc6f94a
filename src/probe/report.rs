use std::time::Duration;

/// Aggregate outcome of a probe run
///
/// One entry in `samples` per completed exchange, in send order. `errors`
/// counts exchanges whose reply failed verification; those rounds still
/// contribute a sample and count toward `total`.
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    /// Number of exchanges performed
    pub count: usize,
    /// Configured payload size in bytes
    pub payload_size: usize,
    /// Exchanges whose reply failed verification
    pub errors: usize,
    /// Per-exchange round-trip times, in send order
    pub samples: Vec<Duration>,
    /// Sum of all round-trip times
    pub total: Duration,
}

impl ProbeReport {
    /// Mean round-trip time across all exchanges, zero when none were sent.
    pub fn average(&self) -> Duration {
        self.total
            .checked_div(self.count as u32)
            .unwrap_or_default()
    }

    /// Total elapsed time in milliseconds.
    pub fn total_millis(&self) -> f64 {
        to_millis(self.total)
    }

    /// Mean round-trip time in milliseconds.
    pub fn average_millis(&self) -> f64 {
        to_millis(self.average())
    }
}

/// Milliseconds in `d`; the single unit conversion for printed times.
pub fn to_millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_over_samples() {
        let report = ProbeReport {
            count: 4,
            total: Duration::from_millis(20),
            ..Default::default()
        };
        assert_eq!(report.average(), Duration::from_millis(5));
    }

    #[test]
    fn average_of_empty_run_is_zero() {
        let report = ProbeReport::default();
        assert_eq!(report.average(), Duration::ZERO);
    }

    #[test]
    fn millis_figures_agree() {
        let report = ProbeReport {
            count: 2,
            total: Duration::from_millis(3),
            ..Default::default()
        };
        assert_eq!(report.total_millis(), 3.0);
        assert_eq!(report.average_millis(), 1.5);
    }
}
