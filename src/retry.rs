use crate::api::{ApiResponse, STATUS_UNAVAILABLE};
use crate::config::RetryConfig;
use log::{debug, warn};
use std::time::Duration;

/// Remaining attempts for one logical API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    remaining: u32,
    max_attempts: u32,
}

impl RetryBudget {
    pub fn new(max_attempts: u32) -> Self {
        RetryBudget {
            remaining: max_attempts,
            max_attempts,
        }
    }

    /// Restore the full budget before a new operation
    pub fn reset(&mut self) {
        self.remaining = self.max_attempts;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    fn consume(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// Result of running an operation under a [`RetryPolicy`]
#[derive(Debug, Clone, PartialEq)]
pub enum RetryOutcome<T> {
    Success(T),
    /// Every attempt failed; `last_status` is the status of the final one
    Exhausted { attempts: u32, last_status: i32 },
}

/// Bounded retry with a fixed delay between attempts
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
    sleeper: Box<dyn Fn(Duration)>,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        RetryPolicy {
            max_attempts,
            delay,
            sleeper: Box::new(std::thread::sleep),
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.retry_delay_ms),
        )
    }

    /// Replace the blocking sleep, e.g. with a recorder in tests
    pub fn with_sleeper(mut self, sleeper: impl Fn(Duration) + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// A full budget for one operation
    pub fn budget(&self) -> RetryBudget {
        RetryBudget::new(self.max_attempts)
    }

    /// Run `operation` until it succeeds or `budget` runs out.
    ///
    /// An attempt succeeds when the response has status 200, a payload, and
    /// `accept` returns `Some` for that payload. Each failure consumes one
    /// unit of budget. When another attempt follows, `on_retry` is told the
    /// failed response and the delay, then the delay is slept.
    pub fn run<T, F, A, R>(
        &self,
        label: &str,
        budget: &mut RetryBudget,
        mut operation: F,
        accept: A,
        mut on_retry: R,
    ) -> RetryOutcome<T>
    where
        F: FnMut() -> ApiResponse,
        A: Fn(&serde_json::Value) -> Option<T>,
        R: FnMut(&ApiResponse, Duration),
    {
        let mut attempts = 0;
        let mut last_status = STATUS_UNAVAILABLE;

        while !budget.is_exhausted() {
            attempts += 1;
            debug!(
                "{} attempt {} ({} remaining)",
                label,
                attempts,
                budget.remaining()
            );

            let response = operation();
            last_status = response.status;
            if response.is_success() {
                if let Some(accepted) = response.payload.as_ref().and_then(&accept) {
                    return RetryOutcome::Success(accepted);
                }
            }

            budget.consume();
            if budget.is_exhausted() {
                break;
            }
            warn!(
                "{} failed, status: {}, retrying in {:?}",
                label, response.status, self.delay
            );
            on_retry(&response, self.delay);
            (self.sleeper)(self.delay);
        }

        warn!("{} failed after {} attempts", label, attempts);
        RetryOutcome::Exhausted {
            attempts,
            last_status,
        }
    }
}
