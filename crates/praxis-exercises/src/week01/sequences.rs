//! Sequence exercises: statistics, ordering, rotation, transposition, and
//! FizzBuzz.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Sum and average of a slice of numbers.
///
/// An empty slice yields `(0.0, 0.0)`.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::stats;
///
/// assert_eq!(stats(&[1.0, 2.0, 3.0, 4.0, 5.0]), (15.0, 3.0));
/// assert_eq!(stats(&[]), (0.0, 0.0));
/// ```
pub fn stats(nums: &[f64]) -> (f64, f64) {
    if nums.is_empty() {
        return (0.0, 0.0);
    }
    let total: f64 = nums.iter().sum();
    (total, total / nums.len() as f64)
}

/// Unique elements in first-occurrence order.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::unique_order;
///
/// assert_eq!(unique_order(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn unique_order<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item.clone());
        }
    }
    out
}

/// Flatten a nested list by exactly one level.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::flatten_one_level;
///
/// let nested = vec![vec![1, 2], vec![3], vec![4, 5]];
/// assert_eq!(flatten_one_level(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten_one_level<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flatten().cloned().collect()
}

/// Rotate a slice to the right by `k` positions.
///
/// `k` is taken modulo the length, so rotating by the length (or by zero)
/// returns the input unchanged.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::rotate_right;
///
/// assert_eq!(rotate_right(&[1, 2, 3, 4, 5], 2), vec![4, 5, 1, 2, 3]);
/// ```
pub fn rotate_right<T: Clone>(items: &[T], k: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let split = items.len() - k % items.len();
    items[split..]
        .iter()
        .chain(&items[..split])
        .cloned()
        .collect()
}

/// Transpose a rectangular matrix.
///
/// Every row must have the same length; a ragged input panics on the short
/// row. An empty matrix transposes to an empty matrix.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::matrix_transpose;
///
/// let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// assert_eq!(matrix_transpose(&matrix), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn matrix_transpose<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };

    (0..first.len())
        .map(|col| matrix.iter().map(|row| row[col].clone()).collect())
        .collect()
}

/// One entry of a FizzBuzz sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    /// Not a multiple of 3 or 5.
    Number(u32),
    /// A multiple of 3 only.
    Fizz,
    /// A multiple of 5 only.
    Buzz,
    /// A multiple of both 3 and 5.
    FizzBuzz,
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::Number(n) => write!(f, "{n}"),
            FizzBuzz::Fizz => f.write_str("Fizz"),
            FizzBuzz::Buzz => f.write_str("Buzz"),
            FizzBuzz::FizzBuzz => f.write_str("FizzBuzz"),
        }
    }
}

/// Generate the FizzBuzz sequence from 1 to `n` inclusive.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::{FizzBuzz, fizzbuzz};
///
/// let seq = fizzbuzz(5);
/// assert_eq!(seq[2], FizzBuzz::Fizz);
/// assert_eq!(seq[4], FizzBuzz::Buzz);
/// ```
pub fn fizzbuzz(n: u32) -> Vec<FizzBuzz> {
    (1..=n)
        .map(|i| match (i % 3, i % 5) {
            (0, 0) => FizzBuzz::FizzBuzz,
            (0, _) => FizzBuzz::Fizz,
            (_, 0) => FizzBuzz::Buzz,
            _ => FizzBuzz::Number(i),
        })
        .collect()
}
