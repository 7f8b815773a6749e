//! Memoizing wrappers over infallible and fallible operations.

use std::collections::HashMap;
use std::hash::Hash;

/// An operation wrapped with an unbounded memo table.
///
/// On each call the argument value is looked up in the table; on a hit the
/// stored result is cloned and returned without invoking the operation, on a
/// miss the operation runs once and its result is stored. The table is owned
/// by this wrapper and dropped with it.
///
/// The key is exactly the argument value passed to [`call`](Memoized::call):
/// if the operation's behavior depends on anything else (ambient state, a
/// captured configuration that changes between calls), those influences are
/// invisible to the table and stale results will be served.
///
/// Calls take `&mut self`; there is no internal synchronization. Share a
/// wrapper between threads behind a lock if needed, accepting that two
/// racing misses may both invoke the operation.
///
/// # Examples
///
/// ```rust
/// use praxis_util::cache::Memoized;
/// use std::cell::Cell;
///
/// let invocations = Cell::new(0u32);
/// let mut fib = Memoized::new(|n: &u64| {
///     invocations.set(invocations.get() + 1);
///     // Naive on purpose; the table absorbs repeat arguments.
///     (1..=*n).fold((0u64, 1u64), |(a, b), _| (b, a + b)).0
/// });
///
/// assert_eq!(fib.call(10), 55);
/// assert_eq!(fib.call(10), 55);
/// assert_eq!(invocations.get(), 1);
/// ```
#[derive(Debug)]
pub struct Memoized<A, R, F> {
    operation: F,
    table: HashMap<A, R>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash,
    R: Clone,
    F: FnMut(&A) -> R,
{
    /// Wrap `operation` with an empty memo table.
    pub fn new(operation: F) -> Self {
        Self {
            operation,
            table: HashMap::new(),
        }
    }

    /// Invoke the wrapped operation for `args`, or return the stored result.
    pub fn call(&mut self, args: A) -> R {
        if let Some(hit) = self.table.get(&args) {
            return hit.clone();
        }
        let result = (self.operation)(&args);
        self.table.insert(args, result.clone());
        result
    }

    /// Number of distinct argument values computed so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether a result is stored for `args`.
    pub fn contains(&self, args: &A) -> bool {
        self.table.contains_key(args)
    }
}

/// The fallible counterpart of [`Memoized`].
///
/// Successful results are stored exactly as `Memoized` stores them. An error
/// from the wrapped operation propagates to the caller and caches nothing,
/// so a later call with the same argument value re-invokes the operation.
///
/// # Examples
///
/// ```rust
/// use praxis_util::cache::TryMemoized;
/// use std::cell::Cell;
///
/// let attempts = Cell::new(0u32);
/// let mut parse = TryMemoized::new(|s: &String| {
///     attempts.set(attempts.get() + 1);
///     s.parse::<i32>()
/// });
///
/// assert!(parse.call("nope".to_string()).is_err());
/// assert!(parse.call("nope".to_string()).is_err()); // re-invoked, not cached
/// assert_eq!(parse.call("7".to_string()).unwrap(), 7);
/// assert_eq!(attempts.get(), 3);
/// ```
#[derive(Debug)]
pub struct TryMemoized<A, R, E, F> {
    operation: F,
    table: HashMap<A, R>,
    _error: std::marker::PhantomData<E>,
}

impl<A, R, E, F> TryMemoized<A, R, E, F>
where
    A: Eq + Hash,
    R: Clone,
    F: FnMut(&A) -> Result<R, E>,
{
    /// Wrap `operation` with an empty memo table.
    pub fn new(operation: F) -> Self {
        Self {
            operation,
            table: HashMap::new(),
            _error: std::marker::PhantomData,
        }
    }

    /// Invoke the wrapped operation for `args`, or return the stored result.
    ///
    /// Errors propagate unchanged and leave the table untouched.
    pub fn call(&mut self, args: A) -> Result<R, E> {
        if let Some(hit) = self.table.get(&args) {
            return Ok(hit.clone());
        }
        let result = (self.operation)(&args)?;
        self.table.insert(args, result.clone());
        Ok(result)
    }

    /// Number of distinct argument values computed successfully so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether nothing has been computed successfully yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether a result is stored for `args`.
    pub fn contains(&self, args: &A) -> bool {
        self.table.contains_key(args)
    }
}
