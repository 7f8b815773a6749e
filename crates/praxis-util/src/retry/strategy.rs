//! The retry strategy trait and its synchronous execute loop.

use std::error::Error;
use std::thread;
use std::time::Duration;

/// A strategy for retrying failed operations with backoff.
///
/// Implementations determine how many attempts to make and how long to wait
/// between them; the provided [`execute`](BackoffStrategy::execute) loop does
/// the rest. Every error is considered retryable: the operation's error type
/// is opaque to the strategy and is never wrapped or translated.
///
/// # Attempt accounting
///
/// `max_attempts` counts *total* invocations, not retries. A strategy with
/// `max_attempts() == 3` invokes the operation at most 3 times; with
/// `max_attempts() == 1` a single failure propagates immediately, with no
/// delay and no diagnostic event.
///
/// # Examples
///
/// ```rust
/// use praxis_util::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::cell::Cell;
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .max_attempts(3)
///     .base_delay(Duration::from_millis(1))
///     .build();
///
/// let calls = Cell::new(0u32);
/// let result = backoff.execute(|| {
///     let n = calls.get();
///     calls.set(n + 1);
///     if n < 2 {
///         Err(std::io::Error::other("retry me"))
///     } else {
///         Ok(42)
///     }
/// });
///
/// assert_eq!(result.unwrap(), 42);
/// assert_eq!(calls.get(), 3);
/// ```
pub trait BackoffStrategy {
    /// Maximum number of times the operation will be invoked.
    ///
    /// Always at least 1.
    fn max_attempts(&self) -> u32;

    /// Calculate the delay to wait after the failure of attempt `attempt`
    /// (zero-based) before the next one.
    ///
    /// Returns `None` when no further attempt will be made, i.e. when
    /// `attempt` was the final attempt.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Execute an operation with retry logic.
    ///
    /// The operation is invoked repeatedly until it succeeds or
    /// [`max_attempts`](BackoffStrategy::max_attempts) invocations have
    /// failed. Each intermediate failure emits a `warn` event carrying the
    /// attempt number, the error, and the computed wait, then blocks the
    /// calling thread for that wait.
    ///
    /// # Returns
    /// - `Ok(T)`: the first successful result
    /// - `Err(E)`: the error from the final attempt, unchanged
    fn execute<T, E, F>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: Error,
    {
        let mut attempt: u32 = 0;
        loop {
            match operation() {
                Ok(value) => return Ok(value),
                Err(err) if attempt + 1 >= self.max_attempts() => return Err(err),
                Err(err) => {
                    let delay = self.next_delay(attempt).unwrap_or(Duration::ZERO);
                    tracing::warn!(
                        attempt = attempt + 1,
                        error = %err,
                        wait_ms = delay.as_millis() as u64,
                        "attempt failed, backing off"
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}
