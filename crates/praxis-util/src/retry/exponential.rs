//! Exponential backoff policy.

use super::strategy::BackoffStrategy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exponential backoff policy.
///
/// Delays between attempts double each time: the wait after the n-th failed
/// attempt (zero-based) is `base_delay * 2^n`. The first retry waits
/// `base_delay`, the second `2 * base_delay`, the third `4 * base_delay`,
/// and so on. There is no jitter and no cap; with `base_delay` of zero every
/// wait is zero.
///
/// The policy is immutable once built.
///
/// # Examples
///
/// ```rust
/// use praxis_util::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), std::io::Error> {
/// // Default configuration (max_attempts=3, base_delay=1s)
/// let backoff = ExponentialBackoff::default();
///
/// // Custom configuration
/// let backoff = ExponentialBackoff::builder()
///     .max_attempts(5)
///     .base_delay(Duration::from_millis(100))
///     .build();
///
/// let result = backoff.execute(|| {
///     // Your operation here
///     Ok::<_, std::io::Error>(42)
/// })?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExponentialBackoff {
    max_attempts: u32,
    base_delay: Duration,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// The delay before the first retry.
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }
}

impl Default for ExponentialBackoff {
    /// Create an exponential backoff with the reference defaults.
    ///
    /// Defaults:
    /// - `max_attempts`: 3
    /// - `base_delay`: 1s
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        if attempt + 1 >= self.max_attempts {
            return None;
        }
        let secs = self.base_delay.as_secs_f64() * 2f64.powi(attempt as i32);
        Some(Duration::from_secs_f64(secs))
    }
}

/// Builder for configuring [`ExponentialBackoff`].
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    max_attempts: Option<u32>,
    base_delay: Option<Duration>,
}

impl ExponentialBackoffBuilder {
    /// Set the maximum number of attempts (total invocations, not retries).
    ///
    /// Values below 1 are clamped to 1.
    ///
    /// Default: 3
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Set the delay before the first retry.
    ///
    /// Default: 1s
    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = Some(delay);
        self
    }

    /// Build the [`ExponentialBackoff`] instance.
    ///
    /// Uses default values for any unset parameters.
    pub fn build(self) -> ExponentialBackoff {
        ExponentialBackoff {
            max_attempts: self.max_attempts.unwrap_or(3),
            base_delay: self.base_delay.unwrap_or(Duration::from_secs(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_doubles_per_attempt() {
        let backoff = ExponentialBackoff::builder()
            .max_attempts(5)
            .base_delay(Duration::from_secs(1))
            .build();

        // Wait before the 2nd attempt: 1.0s
        assert_eq!(backoff.next_delay(0).unwrap(), Duration::from_secs(1));
        // Wait before the 3rd attempt: 2.0s
        assert_eq!(backoff.next_delay(1).unwrap(), Duration::from_secs(2));
        // Wait before the 4th attempt: 4.0s
        assert_eq!(backoff.next_delay(2).unwrap(), Duration::from_secs(4));
        // Wait before the 5th attempt: 8.0s
        assert_eq!(backoff.next_delay(3).unwrap(), Duration::from_secs(8));
    }

    #[test]
    fn test_no_delay_after_final_attempt() {
        let backoff = ExponentialBackoff::builder()
            .max_attempts(3)
            .base_delay(Duration::from_millis(100))
            .build();

        assert!(backoff.next_delay(2).is_none());
        assert!(backoff.next_delay(7).is_none());
    }

    #[test]
    fn test_zero_base_delay_stays_zero() {
        let backoff = ExponentialBackoff::builder()
            .max_attempts(4)
            .base_delay(Duration::ZERO)
            .build();

        for attempt in 0..3 {
            assert_eq!(backoff.next_delay(attempt).unwrap(), Duration::ZERO);
        }
    }

    #[test]
    fn test_builder_defaults() {
        let backoff = ExponentialBackoff::builder().build();

        assert_eq!(backoff.max_attempts, 3);
        assert_eq!(backoff.base_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_max_attempts_clamped_to_one() {
        let backoff = ExponentialBackoff::builder().max_attempts(0).build();

        assert_eq!(backoff.max_attempts(), 1);
    }

    #[test]
    fn test_policy_round_trips_through_serde() {
        let backoff = ExponentialBackoff::builder()
            .max_attempts(5)
            .base_delay(Duration::from_millis(250))
            .build();

        let json = serde_json::to_string(&backoff).unwrap();
        let restored: ExponentialBackoff = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, backoff);
    }
}
