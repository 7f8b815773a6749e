//! Retry with exponential backoff.
//!
//! This module provides one abstraction for retry logic: a strategy decides
//! how many attempts to make and how long to wait between them, and the
//! wrapped operation is re-invoked until it succeeds or the attempt bound is
//! reached. The final failure propagates to the caller unchanged; failures
//! of intermediate attempts are reported only as `tracing` events.
//!
//! Delays block the calling thread. There is no cancellation point inside a
//! delay; if the wrapped operation must remain responsive, keep `base_delay`
//! short.
//!
//! # Key Types
//!
//! - [`BackoffStrategy`] - Core trait for retry strategies
//! - [`ExponentialBackoff`] - Doubling backoff policy with a builder
//! - [`Retrying`] - A callable wrapped once with a policy
//!
//! # Examples
//!
//! ```rust
//! use praxis_util::retry::{BackoffStrategy, ExponentialBackoff};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), std::io::Error> {
//! let backoff = ExponentialBackoff::builder()
//!     .max_attempts(3)
//!     .base_delay(Duration::from_millis(10))
//!     .build();
//!
//! let result = backoff.execute(|| {
//!     // Your operation here
//!     Ok::<_, std::io::Error>(42)
//! })?;
//! # Ok(())
//! # }
//! ```

mod exponential;
mod strategy;
mod wrapper;

pub use exponential::{ExponentialBackoff, ExponentialBackoffBuilder};
pub use strategy::BackoffStrategy;
pub use wrapper::Retrying;
