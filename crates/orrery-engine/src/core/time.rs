/// Wall-clock elapsed-time tracker.
///
/// The host supplies monotonic timestamps in milliseconds (e.g.
/// `performance.now()`); the clock reports seconds since it was started.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    /// Timestamp (ms) at which the clock was started, if running.
    start_ms: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the clock at `now_ms`.
    pub fn start(&mut self, now_ms: f64) {
        self.start_ms = Some(now_ms);
    }

    /// Seconds elapsed since `start`. Starts the clock on first use.
    /// Timestamps earlier than the start clamp to zero.
    pub fn elapsed(&mut self, now_ms: f64) -> f32 {
        let start = *self.start_ms.get_or_insert(now_ms);
        (((now_ms - start) / 1000.0).max(0.0)) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_read_starts_at_zero() {
        let mut clock = Clock::new();
        assert_eq!(clock.elapsed(1234.0), 0.0);
        assert!((clock.elapsed(2234.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reports_seconds_since_start() {
        let mut clock = Clock::new();
        clock.start(1000.0);
        assert!((clock.elapsed(3500.0) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn earlier_timestamps_clamp_to_zero() {
        let mut clock = Clock::new();
        clock.start(1000.0);
        assert_eq!(clock.elapsed(500.0), 0.0);
    }

    #[test]
    fn restart_resets_origin() {
        let mut clock = Clock::new();
        clock.start(0.0);
        clock.start(10_000.0);
        assert!((clock.elapsed(11_000.0) - 1.0).abs() < 1e-6);
    }
}
