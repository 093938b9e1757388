use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use super::{RATE_LIMIT_WINDOW, REQUESTS_PER_MINUTE_LIMIT};

/// Sliding-window throttle over submission instants. Best effort only: state
/// lives with the owning controller and is never shared or persisted.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    limit: usize,
    window: Duration,
    timestamps: VecDeque<Instant>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(REQUESTS_PER_MINUTE_LIMIT, RATE_LIMIT_WINDOW)
    }
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            timestamps: VecDeque::with_capacity(limit),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Prunes expired entries and reports whether another submission fits.
    /// Does not record anything.
    pub fn check(&mut self, now: Instant) -> bool {
        self.prune(now);
        self.timestamps.len() < self.limit
    }

    pub fn record(&mut self, now: Instant) {
        self.timestamps.push_back(now);
    }

    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if !self.check(now) {
            return false;
        }

        self.record(now);
        true
    }

    pub fn in_window(&mut self, now: Instant) -> usize {
        self.prune(now);
        self.timestamps.len()
    }

    fn prune(&mut self, now: Instant) {
        // timestamps are pushed in order, so expired ones sit at the front
        while let Some(oldest) = self.timestamps.front() {
            if now.saturating_duration_since(*oldest) < self.window {
                break;
            }
            self.timestamps.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_limit_then_denies() {
        let mut limiter = RateLimiter::default();
        let start = Instant::now();

        for i in 0..10 {
            assert!(limiter.try_acquire(start + Duration::from_secs(i)), "submission {}", i + 1);
        }

        assert!(!limiter.try_acquire(start + Duration::from_secs(59)));
        assert_eq!(limiter.in_window(start + Duration::from_secs(59)), 10);
    }

    #[test]
    fn window_slides_past_oldest_timestamp() {
        let mut limiter = RateLimiter::default();
        let start = Instant::now();

        for i in 0..10 {
            limiter.record(start + Duration::from_secs(i));
        }

        assert!(!limiter.check(start + Duration::from_millis(59_999)));
        // exactly one window after the first entry it stops counting
        assert!(limiter.check(start + Duration::from_secs(60)));
        assert_eq!(limiter.in_window(start + Duration::from_secs(60)), 9);
        assert_eq!(limiter.in_window(start + Duration::from_secs(70)), 0);
    }

    #[test]
    fn check_does_not_record() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();

        assert!(limiter.check(now));
        assert!(limiter.check(now));
        assert!(limiter.try_acquire(now));
        assert!(!limiter.check(now));
    }

    #[test]
    fn denied_attempts_do_not_extend_the_window() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(10));
        let start = Instant::now();

        assert!(limiter.try_acquire(start));
        assert!(limiter.try_acquire(start + Duration::from_secs(1)));
        assert!(!limiter.try_acquire(start + Duration::from_secs(5)));
        assert!(limiter.try_acquire(start + Duration::from_secs(10)));
    }
}
