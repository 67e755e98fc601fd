//! Publish rate limiter
//!
//! Continuous sources (slider drags, animation ticks) can produce far more
//! events per second than the lamp endpoint wants to see. The limiter admits
//! at most one publish per interval; everything else is dropped, and the
//! discrete gesture-boundary events bypass it entirely so the endpoint
//! always receives the final state.
//!
//! The last-publish timestamp is a single atomic word updated by
//! compare-and-exchange, so admission stays correct when the UI task and the
//! animation worker race for the same window.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Minimum interval between continuous-source publishes
pub const MIN_PUBLISH_INTERVAL: Duration = Duration::from_millis(100);

/// Admits at most one publish per interval across concurrent sources
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum inter-publish interval in milliseconds
    min_interval_ms: u64,

    /// Monotonic millisecond timestamp of the last admitted publish
    last_publish_at: AtomicU64,
}

impl RateLimiter {
    /// Create a limiter with the given minimum interval
    ///
    /// The last-publish timestamp starts at zero, the controller's start
    /// time on its monotonic clock.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval_ms: min_interval.as_millis() as u64,
            last_publish_at: AtomicU64::new(0),
        }
    }

    /// Try to admit a publish at `now_ms` (milliseconds on a monotonic clock)
    ///
    /// Returns `true` and records `now_ms` iff at least the minimum interval
    /// has elapsed since the last admitted publish. Returns `false` without
    /// mutation otherwise.
    pub fn try_admit(&self, now_ms: u64) -> bool {
        let mut last = self.last_publish_at.load(Ordering::Acquire);
        loop {
            if now_ms.saturating_sub(last) < self.min_interval_ms {
                return false;
            }
            match self.last_publish_at.compare_exchange_weak(
                last,
                now_ms,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                // Another source won this window; re-check against its timestamp
                Err(actual) => last = actual,
            }
        }
    }

    /// Millisecond timestamp of the last admitted publish
    pub fn last_publish_at(&self) -> u64 {
        self.last_publish_at.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_after_interval() {
        let limiter = RateLimiter::new(Duration::from_millis(100));

        assert!(limiter.try_admit(100));
        assert!(!limiter.try_admit(150));
        assert!(!limiter.try_admit(199));
        assert!(limiter.try_admit(200));
        assert_eq!(limiter.last_publish_at(), 200);
    }

    #[test]
    fn test_rejection_does_not_mutate() {
        let limiter = RateLimiter::new(Duration::from_millis(100));

        assert!(limiter.try_admit(100));
        assert!(!limiter.try_admit(150));
        assert_eq!(limiter.last_publish_at(), 100);

        // The window is still measured from the admitted publish
        assert!(limiter.try_admit(200));
    }

    #[test]
    fn test_throttles_a_drag() {
        // Slider events every 10ms; only the window boundaries get through
        let limiter = RateLimiter::new(Duration::from_millis(100));
        let admitted: Vec<u64> = (0..=200)
            .step_by(10)
            .map(|t| 1000 + t)
            .filter(|&t| limiter.try_admit(t))
            .collect();

        assert_eq!(admitted, vec![1000, 1100, 1200]);
    }

    #[test]
    fn test_time_going_backwards_is_rejected() {
        let limiter = RateLimiter::new(Duration::from_millis(100));

        assert!(limiter.try_admit(500));
        assert!(!limiter.try_admit(400));
        assert_eq!(limiter.last_publish_at(), 500);
    }

    #[test]
    fn test_concurrent_sources_share_one_window() {
        use std::sync::Arc;

        let limiter = Arc::new(RateLimiter::new(Duration::from_millis(100)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || limiter.try_admit(100))
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();

        // All contenders carry the same timestamp; exactly one wins
        assert_eq!(admitted, 1);
        assert_eq!(limiter.last_publish_at(), 100);
    }
}
