//! Sliding-window throttle for README probes.
//!
//! At most `limit` acquisitions complete within any window of `interval`.
//! Waiters hold the queue lock while sleeping, so they are served in
//! arrival order.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::ThrottleConfig;

/// Shared start-rate limiter for one batch run.
#[derive(Debug)]
pub struct ProbeThrottle {
    limit: usize,
    interval: Duration,
    /// Start times inside the current window, oldest first
    starts: Mutex<VecDeque<Instant>>,
}

impl ProbeThrottle {
    /// Create a throttle allowing `limit` starts per `interval`.
    ///
    /// # Example
    /// ```
    /// use scm_insights::services::ProbeThrottle;
    /// use std::time::Duration;
    ///
    /// let throttle = ProbeThrottle::new(1, Duration::from_secs(1));
    /// ```
    pub fn new(limit: u32, interval: Duration) -> Self {
        assert!(limit > 0, "Throttle limit must be positive");

        Self {
            limit: limit as usize,
            interval,
            starts: Mutex::new(VecDeque::with_capacity(limit as usize)),
        }
    }

    /// Build from configuration, rejecting a zero limit.
    pub fn from_config(config: &ThrottleConfig) -> DomainResult<Self> {
        if config.limit == 0 {
            return Err(DomainError::ValidationFailed(
                "throttle limit must be at least 1".to_string(),
            ));
        }
        Ok(Self::new(
            config.limit,
            Duration::from_millis(config.interval_ms),
        ))
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until a start slot is free and claim it.
    pub async fn acquire(&self) {
        let mut starts = self.starts.lock().await;
        loop {
            let now = Instant::now();
            while starts
                .front()
                .is_some_and(|oldest| now.duration_since(*oldest) >= self.interval)
            {
                starts.pop_front();
            }

            if starts.len() < self.limit {
                starts.push_back(now);
                return;
            }

            let Some(oldest) = starts.front().copied() else {
                continue;
            };
            let wait = self.interval.saturating_sub(now.duration_since(oldest));
            tracing::trace!(wait_ms = wait.as_millis() as u64, "probe throttled");
            sleep(wait).await;
        }
    }
}
