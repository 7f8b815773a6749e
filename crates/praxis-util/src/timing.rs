//! Elapsed-time measurement.
//!
//! Observational helpers only: nothing here changes what the measured code
//! returns. Reports go through `tracing`, so a host without a subscriber
//! pays almost nothing.

use std::time::{Duration, Instant};

/// A scoped timer.
///
/// Records its start instant on creation and emits the elapsed time as a
/// `tracing` event when dropped. Use [`elapsed`](Timer::elapsed) to read the
/// running duration without ending the scope, or [`stop`](Timer::stop) to
/// end it explicitly and get the total.
///
/// # Examples
///
/// ```rust
/// use praxis_util::timing::Timer;
///
/// let timer = Timer::start("csv import");
/// // ... work ...
/// let took = timer.stop();
/// assert!(took >= std::time::Duration::ZERO);
/// ```
#[derive(Debug)]
pub struct Timer {
    name: String,
    started: Instant,
}

impl Timer {
    /// Start a timer named `name`.
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            started: Instant::now(),
        }
    }

    /// Time elapsed since the timer was started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the timer, reporting and returning the total elapsed time.
    pub fn stop(self) -> Duration {
        // dropping self emits the event
        self.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        tracing::info!(
            name = %self.name,
            elapsed_ms = elapsed.as_millis() as u64,
            "timer finished"
        );
    }
}

/// Run `f`, returning its result together with how long it took.
///
/// The duration is also reported as a `debug` event named after `name`.
///
/// # Examples
///
/// ```rust
/// use praxis_util::timing::timed;
///
/// let (sum, took) = timed("sum to 100", || (1..=100).sum::<u32>());
/// assert_eq!(sum, 5050);
/// assert!(took >= std::time::Duration::ZERO);
/// ```
pub fn timed<T>(name: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    let elapsed = started.elapsed();
    tracing::debug!(
        name,
        elapsed_ms = elapsed.as_millis() as u64,
        "operation timed"
    );
    (value, elapsed)
}
