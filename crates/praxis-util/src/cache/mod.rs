//! Argument-keyed memoization.
//!
//! [`Memoized`] wraps an operation so that each distinct argument value is
//! computed at most once per wrapper lifetime; [`TryMemoized`] is the
//! fallible variant, which never caches a failed computation. Both tables
//! are unbounded: entries live exactly as long as the wrapper that owns
//! them, and there is no eviction or TTL.
//!
//! The key is the entire argument value, compared by structural equality
//! (`Eq + Hash`). Argument types that cannot serve as a stable key are
//! rejected at compile time.
//!
//! # Examples
//!
//! ```rust
//! use praxis_util::cache::Memoized;
//!
//! let mut square = Memoized::new(|n: &u64| n * n);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144); // served from the table
//! assert_eq!(square.len(), 1);
//! ```

mod memoized;

pub use memoized::{Memoized, TryMemoized};
