//! Week 2: I/O and pattern matching.

pub mod emails;

pub use emails::extract_emails;
