use std::time::{Duration, Instant};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1100);

/// Deadline ticker for poll-driven loops.
///
/// Holds at most one pending deadline. Arming replaces any previous deadline,
/// and a fire re-arms relative to the time it was observed, so a late poll
/// yields one tick rather than a catch-up burst.
#[derive(Debug, Clone)]
pub struct Cadence {
    period: Duration,
    deadline: Option<Instant>,
}

impl Cadence {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left before the next fire, or `None` when disarmed.
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(1100);

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut cadence = Cadence::new(PERIOD);
        assert!(!cadence.fire(start + PERIOD));

        cadence.arm(start);
        assert!(!cadence.fire(start + Duration::from_millis(1099)));
        assert!(cadence.fire(start + PERIOD));
        assert!(!cadence.fire(start + PERIOD));
        assert!(cadence.fire(start + PERIOD * 2));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let start = Instant::now();
        let mut cadence = Cadence::new(PERIOD);
        cadence.arm(start);

        let late = start + PERIOD * 5;
        assert!(cadence.fire(late));
        assert!(!cadence.fire(late));
        assert_eq!(cadence.time_until(late), Some(PERIOD));
    }

    #[test]
    fn test_rearm_restarts_period() {
        let start = Instant::now();
        let mut cadence = Cadence::new(PERIOD);
        cadence.arm(start);

        cadence.cancel();
        assert!(!cadence.is_armed());
        assert_eq!(cadence.time_until(start), None);

        let resume = start + Duration::from_millis(800);
        cadence.arm(resume);
        assert!(!cadence.fire(start + PERIOD));
        assert!(cadence.fire(resume + PERIOD));
    }
}
