//! Outbound-call rate limiter

use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Default upstream quota: 200 calls per minute (300 ms floor)
pub const DEFAULT_CALLS_PER_MINUTE: u32 = 200;

/// FIFO single-flight throttle for outbound calls
///
/// At most one task executes at a time; before a task starts, the
/// limiter sleeps whatever remains of the minimum interval since the
/// previous task's start. Waiters acquire in submission order (the
/// tokio mutex is fair) and a task's failure does not block the tasks
/// queued behind it.
///
/// Construct one instance per upstream quota and share it by handle
/// across every call site; per-request instances would silently exceed
/// the quota under concurrent load.
pub struct RateLimiter {
    last_start: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    /// Limiter for a calls-per-minute quota
    pub fn new(calls_per_minute: u32) -> Self {
        let calls = calls_per_minute.max(1) as u64;
        Self::with_min_interval(Duration::from_millis(60_000 / calls))
    }

    /// Limiter with an explicit minimum interval between call starts
    pub fn with_min_interval(min_interval: Duration) -> Self {
        Self {
            last_start: Mutex::new(None),
            min_interval,
        }
    }

    /// Zero-delay limiter for tests
    pub fn unthrottled() -> Self {
        Self::with_min_interval(Duration::ZERO)
    }

    /// The configured spacing floor between call starts
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Run a task once the spacing floor allows it
    ///
    /// The task's output is returned as-is; a task that resolves to an
    /// error still counts as a call and still releases the queue.
    pub async fn throttle<T, F, Fut>(&self, task: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut last_start = self.last_start.lock().await;
        if let Some(previous) = *last_start {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last_start = Some(Instant::now());
        // Guard held through execution: strict FIFO, one task in flight
        task().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_starts_respect_interval() {
        let limiter = Arc::new(RateLimiter::new(200));
        assert_eq!(limiter.min_interval(), Duration::from_millis(300));

        let starts = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let limiter = Arc::clone(&limiter);
            let starts = Arc::clone(&starts);
            handles.push(tokio::spawn(async move {
                limiter
                    .throttle(|| async {
                        starts.lock().unwrap().push(Instant::now());
                    })
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let starts = starts.lock().unwrap();
        assert_eq!(starts.len(), 4);
        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(300));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_task_runs_immediately() {
        let limiter = RateLimiter::new(200);
        let before = Instant::now();
        limiter.throttle(|| async {}).await;
        assert_eq!(Instant::now(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_does_not_block_queue() {
        let limiter = Arc::new(RateLimiter::with_min_interval(Duration::from_millis(50)));

        let failed: Result<(), &str> = limiter.throttle(|| async { Err("boom") }).await;
        assert!(failed.is_err());

        let ok: Result<&str, &str> = limiter.throttle(|| async { Ok("next") }).await;
        assert_eq!(ok, Ok("next"));
    }

    #[tokio::test]
    async fn test_unthrottled_has_no_floor() {
        let limiter = RateLimiter::unthrottled();
        for i in 0..10 {
            let out = limiter.throttle(|| async move { i }).await;
            assert_eq!(out, i);
        }
    }
}
