//! Periodic tick source driven by the app clock

use std::time::Duration;

/// Fires once per elapsed period until cancelled
///
/// The next deadline is scheduled from the moment a tick fires, so a late
/// frame delays every following tick instead of bunching them up.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Duration>,
}

impl Ticker {
    /// First tick fires one period after app start
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Some(period),
        }
    }

    /// Whether a tick is due at app time `now`
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.next {
            Some(deadline) if now >= deadline => {
                self.next = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Stop all future ticks
    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_active(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_ticks_once_per_period() {
        let mut ticker = Ticker::new(SECOND);
        assert!(!ticker.poll(Duration::from_millis(500)));
        assert!(ticker.poll(Duration::from_millis(1_000)));
        assert!(!ticker.poll(Duration::from_millis(1_016)));
        assert!(!ticker.poll(Duration::from_millis(1_999)));
        assert!(ticker.poll(Duration::from_millis(2_010)));
    }

    #[test]
    fn test_late_frame_does_not_double_tick() {
        let mut ticker = Ticker::new(SECOND);
        assert!(ticker.poll(Duration::from_millis(3_500)));
        assert!(!ticker.poll(Duration::from_millis(3_600)));
        assert!(ticker.poll(Duration::from_millis(4_500)));
    }

    #[test]
    fn test_cancelled_ticker_never_fires() {
        let mut ticker = Ticker::new(SECOND);
        ticker.cancel();
        assert!(!ticker.is_active());
        assert!(!ticker.poll(Duration::from_secs(60)));
    }
}
