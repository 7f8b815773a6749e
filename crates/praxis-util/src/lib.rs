#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Reusable helpers for the praxis workbook.
//!
//! The exercises in the companion crate are deliberately independent of each
//! other; this crate holds the small set of utilities they (and any host
//! program) share:
//!
//! - **Retry with exponential backoff** via the [`retry::BackoffStrategy`]
//!   trait and [`retry::ExponentialBackoff`]
//! - **Memoization** via [`cache::Memoized`] and [`cache::TryMemoized`]
//! - **File helpers** for line-oriented reading/writing and line/word/
//!   character counting
//! - **Elapsed-time measurement** via [`timing::Timer`]
//!
//! Everything here is synchronous: a retry delay blocks the calling thread,
//! and the memo table is owned by a single wrapper with `&mut self` calls.
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use praxis_util::prelude::*;
//! use std::time::Duration;
//!
//! let backoff = ExponentialBackoff::builder()
//!     .max_attempts(3)
//!     .base_delay(Duration::from_millis(10))
//!     .build();
//!
//! let answer = backoff.execute(|| Ok::<_, std::io::Error>(42));
//! assert_eq!(answer.unwrap(), 42);
//! ```

pub mod cache;
pub mod error;
pub mod io;
pub mod retry;
pub mod timing;

/// Convenient re-exports of commonly used items.
///
/// Import all core helpers with:
///
/// ```rust
/// use praxis_util::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cache::{Memoized, TryMemoized};
    pub use crate::error::{Error, Result};
    pub use crate::io::{FileStats, count_file_stats, read_lines, write_lines};
    pub use crate::retry::{BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder, Retrying};
    pub use crate::timing::{Timer, timed};
}
