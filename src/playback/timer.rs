//! Cooperative timekeeping for auto-play
//!
//! There are no threads and no background timers here. The event loop polls
//! input with a short timeout and passes `Instant::now()` into the engine each
//! iteration; [`Ticker`] decides how many move intervals have elapsed since it
//! was armed. Cancellation is therefore just disarming the ticker: a ticker
//! that is not armed never fires, so no stale callback can outlive a pause or
//! a reconfiguration.
//!
//! [`Stopwatch`] accumulates wall-clock time the same way, counting only the
//! stretches where playback was actually running.

use std::time::{Duration, Instant};

/// A cancellable repeating deadline, advanced by polling
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker with the given interval
    pub fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            deadline: None,
        }
    }

    /// Arm the ticker: the first fire is one interval from `now`
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Disarm the ticker; a disarmed ticker never fires
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Check whether the ticker is armed
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Change the interval, keeping the armed/disarmed state.
    ///
    /// When armed, the next fire is rescheduled to one new interval from `now`.
    pub fn reschedule(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.deadline.is_some() {
            self.deadline = Some(now + interval);
        }
    }

    /// Report one elapsed interval, advancing the deadline by exactly one
    /// interval per call.
    ///
    /// Call in a loop to catch up after a long gap: each call returns `true`
    /// once per interval that has fully elapsed, then `false`. The deadline
    /// advances by the interval, not to `now`, so the cadence stays fixed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(deadline + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// Wall-clock accumulator that only counts time while running
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Stopwatch::default()
    }

    /// Start counting from `now`; no-op if already running
    pub fn resume(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stop counting, folding the running stretch into the total
    pub fn pause(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(started_at);
        }
    }

    /// Clear the total and stop counting
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    /// Total accumulated time, including the current running stretch
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + now.saturating_duration_since(started_at),
            None => self.accumulated,
        }
    }
}

/// Format a duration as MM:SS, with minutes growing past 99 if needed
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.arm(t0);

        assert!(!ticker.fire(t0));
        assert!(!ticker.fire(t0 + Duration::from_millis(99)));
        assert!(ticker.fire(t0 + Duration::from_millis(100)));
        assert!(!ticker.fire(t0 + Duration::from_millis(150)));
        assert!(ticker.fire(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_ticker_catches_up_after_gap() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.arm(t0);

        // Poll far past three deadlines: three fires, then quiescent
        let late = t0 + Duration::from_millis(350);
        assert!(ticker.fire(late));
        assert!(ticker.fire(late));
        assert!(ticker.fire(late));
        assert!(!ticker.fire(late));
    }

    #[test]
    fn test_cancelled_ticker_never_fires() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.arm(t0);
        ticker.cancel();

        assert!(!ticker.is_armed());
        assert!(!ticker.fire(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_reschedule_moves_deadline() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.arm(t0);

        // Rescheduling at t0+50 pushes the next fire to t0+50 + new interval
        ticker.reschedule(Duration::from_millis(200), t0 + Duration::from_millis(50));
        assert!(ticker.is_armed());
        assert!(!ticker.fire(t0 + Duration::from_millis(100)));
        assert!(!ticker.fire(t0 + Duration::from_millis(249)));
        assert!(ticker.fire(t0 + Duration::from_millis(250)));
    }

    #[test]
    fn test_reschedule_when_disarmed_keeps_it_disarmed() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100));

        ticker.reschedule(Duration::from_millis(10), t0);
        assert!(!ticker.is_armed());
        assert!(!ticker.fire(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_stopwatch_excludes_paused_time() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();

        watch.resume(t0);
        watch.pause(t0 + Duration::from_secs(3));

        // A long paused stretch adds nothing
        let t1 = t0 + Duration::from_secs(100);
        assert_eq!(watch.elapsed(t1), Duration::from_secs(3));

        watch.resume(t1);
        assert_eq!(
            watch.elapsed(t1 + Duration::from_secs(2)),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_stopwatch_reset_zeroes() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.resume(t0);
        watch.reset();

        assert_eq!(watch.elapsed(t0 + Duration::from_secs(9)), Duration::ZERO);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_secs(65)), "01:05");
        assert_eq!(format_clock(Duration::from_secs(600)), "10:00");
        assert_eq!(format_clock(Duration::from_secs(6000)), "100:00");
    }
}
