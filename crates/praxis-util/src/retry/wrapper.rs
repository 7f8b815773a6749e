//! A callable wrapped once with a retry policy.

use super::exponential::ExponentialBackoff;
use super::strategy::BackoffStrategy;
use std::error::Error;

/// An operation wrapped with an [`ExponentialBackoff`] policy.
///
/// Where [`BackoffStrategy::execute`] retries a closure for a single call,
/// `Retrying` is the decorator form: the operation is wrapped once, and
/// every call made through [`call`](Retrying::call) goes through the retry
/// loop. The wrapper keeps the operation's identity metadata (a name and an
/// optional description) so that diagnostics and introspection still refer
/// to the underlying operation rather than to an anonymous closure.
///
/// # Examples
///
/// ```rust
/// use praxis_util::retry::{ExponentialBackoff, Retrying};
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .max_attempts(3)
///     .base_delay(Duration::from_millis(1))
///     .build();
///
/// let mut fetch = Retrying::new(backoff, "fetch_user", |id: &u32| {
///     Ok::<_, std::io::Error>(format!("user-{id}"))
/// });
///
/// assert_eq!(fetch.name(), "fetch_user");
/// assert_eq!(fetch.call(7).unwrap(), "user-7");
/// ```
#[derive(Debug)]
pub struct Retrying<F> {
    backoff: ExponentialBackoff,
    name: &'static str,
    description: Option<&'static str>,
    operation: F,
}

impl<F> Retrying<F> {
    /// Wrap `operation` with the given policy.
    ///
    /// `name` identifies the wrapped operation in diagnostic events.
    pub fn new(backoff: ExponentialBackoff, name: &'static str, operation: F) -> Self {
        Self {
            backoff,
            name,
            description: None,
            operation,
        }
    }

    /// Attach a human-readable description of the wrapped operation.
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// The wrapped operation's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped operation's description, if one was attached.
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// The retry policy this wrapper applies.
    pub fn backoff(&self) -> &ExponentialBackoff {
        &self.backoff
    }

    /// Invoke the wrapped operation with `args`, retrying per the policy.
    ///
    /// The final failure propagates unchanged; intermediate failures are
    /// visible only as `tracing` events, tagged with the operation's name.
    pub fn call<A, T, E>(&mut self, args: A) -> Result<T, E>
    where
        F: FnMut(&A) -> Result<T, E>,
        E: Error,
    {
        let Self {
            backoff,
            name,
            operation,
            ..
        } = self;
        let _span = tracing::debug_span!("retry", operation = *name).entered();
        backoff.execute(|| operation(&args))
    }
}
