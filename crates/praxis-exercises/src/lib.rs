#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Algorithmic exercises for the praxis workbook.
//!
//! Each function here is an isolated, pure exercise: no shared state, no
//! dependencies between problems, and nothing beyond its own contract. The
//! modules are grouped by week, matching the workbook's curriculum:
//!
//! - [`week01`] - basics: strings, sequences, and arithmetic
//! - [`week02`] - I/O and pattern matching
//!
//! Shared utilities (retry, memoization, file helpers, timing) live in the
//! companion `praxis-util` crate.

pub mod week01;
pub mod week02;

mod property_tests;
