//! Bounded exponential-backoff retry.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::{debug, error, warn};

/// Attempt ceiling and backoff bounds for one logical call.
///
/// The delay after failed attempt `k` is
/// `min(max_backoff, min_backoff * 2^(k-1))`. No jitter is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    min_backoff: Duration,
    max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// `max_attempts` is clamped to at least one attempt.
    pub fn new(max_attempts: u32, min_backoff: Duration, max_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            min_backoff,
            max_backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn min_backoff(&self) -> Duration {
        self.min_backoff
    }

    pub fn max_backoff(&self) -> Duration {
        self.max_backoff
    }

    /// Delay to wait after failed attempt `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.min_backoff
            .checked_mul(1u32 << exponent)
            .map_or(self.max_backoff, |delay| delay.min(self.max_backoff))
    }

    /// Run `op` until it succeeds, fails with an error `retryable` rejects,
    /// or the attempt ceiling is reached.
    ///
    /// `op` receives the 1-based attempt number. The last error is returned
    /// unchanged.
    pub async fn run<T, E, F, Fut, R>(&self, label: &str, mut op: F, retryable: R) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        R: Fn(&E) -> bool,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(target: "tahubu_sf::http", attempt, "{} succeeded after retry", label);
                    }
                    return Ok(value);
                }
                Err(err) if attempt < self.max_attempts && retryable(&err) => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        target: "tahubu_sf::http",
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "{} failed, retrying",
                        label
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(
                        target: "tahubu_sf::http",
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "{} failed",
                        label
                    );
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::LogCapture;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use tokio::time::Instant;
    use tracing::Level;

    fn policy(max_attempts: u32, min_secs: u64, max_secs: u64) -> RetryPolicy {
        RetryPolicy::new(
            max_attempts,
            Duration::from_secs(min_secs),
            Duration::from_secs(max_secs),
        )
    }

    #[test]
    fn test_delay_doubles_then_caps() {
        let p = policy(6, 1, 5);
        assert_eq!(p.delay_after(1), Duration::from_secs(1));
        assert_eq!(p.delay_after(2), Duration::from_secs(2));
        assert_eq!(p.delay_after(3), Duration::from_secs(4));
        assert_eq!(p.delay_after(4), Duration::from_secs(5));
        assert_eq!(p.delay_after(5), Duration::from_secs(5));
    }

    #[test]
    fn test_delay_survives_huge_attempt_numbers() {
        let p = policy(3, 1, 5);
        assert_eq!(p.delay_after(40), Duration::from_secs(5));
        assert_eq!(p.delay_after(u32::MAX), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        assert_eq!(policy(0, 1, 5).max_attempts(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_continuous_failure_makes_exactly_max_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let result: Result<(), String> = policy(4, 1, 5)
            .run(
                "call",
                |_| {
                    let counter = Arc::clone(&counter);
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Err("boom".to_string())
                    }
                },
                |_| true,
            )
            .await;

        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_third_attempt_waits_one_then_two_seconds() {
        let started = Instant::now();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        let result = policy(3, 1, 5)
            .run(
                "call",
                |attempt| {
                    let log = Arc::clone(&log);
                    async move {
                        log.lock().unwrap().push((attempt, started.elapsed()));
                        if attempt < 3 {
                            Err(format!("HTTP 500 on attempt {attempt}"))
                        } else {
                            Ok("done")
                        }
                    }
                },
                |_| true,
            )
            .await;

        assert_eq!(result.unwrap(), "done");
        let seen = seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (1, Duration::ZERO),
                (2, Duration::from_secs(1)),
                (3, Duration::from_secs(3)),
            ]
        );
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_logs_warn_per_retry_and_error_on_final_failure() {
        let (logs, _guard) = LogCapture::install();

        let result: Result<(), String> = policy(3, 1, 5)
            .run("call", |_| async { Err("HTTP 503".to_string()) }, |_| true)
            .await;

        assert!(result.is_err());
        assert_eq!(logs.count(Level::WARN, "tahubu_sf::http"), 2);
        assert_eq!(logs.count(Level::ERROR, "tahubu_sf::http"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_failure_logs_only_the_error() {
        let (logs, _guard) = LogCapture::install();

        let result: Result<(), &str> = policy(3, 1, 5)
            .run("call", |_| async { Err("bad json") }, |_| false)
            .await;

        assert!(result.is_err());
        assert_eq!(logs.count(Level::WARN, "tahubu_sf::http"), 0);
        assert_eq!(logs.count(Level::ERROR, "tahubu_sf::http"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_success_incurs_no_delay() {
        let started = Instant::now();
        let result: Result<u8, String> = policy(3, 1, 5)
            .run("call", |_| async { Ok(7) }, |_| true)
            .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_error_stops_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let result: Result<(), &str> = policy(5, 1, 5)
            .run(
                "call",
                |_| {
                    let counter = Arc::clone(&counter);
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Err("malformed body")
                    }
                },
                |err| *err != "malformed body",
            )
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
