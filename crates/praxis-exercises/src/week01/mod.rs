//! Week 1: string and sequence basics.

pub mod sequences;
pub mod strings;

pub use sequences::{FizzBuzz, fizzbuzz, flatten_one_level, matrix_transpose, rotate_right, stats, unique_order};
pub use strings::{freq_counter, is_anagram, is_palindrome, rle_compress};
