//! Property-based tests for the exercises.
//!
//! These use proptest to generate random inputs and verify invariants that
//! hold for every input, complementing the example-based tests in each
//! module.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::week01::{
        FizzBuzz, fizzbuzz, flatten_one_level, is_anagram, is_palindrome, matrix_transpose,
        rotate_right, stats, unique_order,
    };

    // ===== Strategy Generators =====

    fn arb_matrix() -> impl Strategy<Value = Vec<Vec<i32>>> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(any::<i32>(), cols), rows)
        })
    }

    fn arb_alnum() -> impl Strategy<Value = String> {
        "[a-z0-9]{0,20}"
    }

    proptest! {
        /// Property: transposing twice is the identity
        /// Invariant: holds for every rectangular matrix
        #[test]
        fn prop_transpose_is_an_involution(matrix in arb_matrix()) {
            prop_assert_eq!(matrix_transpose(&matrix_transpose(&matrix)), matrix);
        }

        /// Property: rotation preserves length and wraps modulo the length
        #[test]
        fn prop_rotate_wraps_modulo_length(
            items in prop::collection::vec(any::<i32>(), 1..20),
            k in 0usize..100,
        ) {
            let rotated = rotate_right(&items, k);
            prop_assert_eq!(rotated.len(), items.len());
            prop_assert_eq!(rotated, rotate_right(&items, k % items.len()));
        }

        /// Property: rotating by the full length changes nothing
        #[test]
        fn prop_rotate_by_length_is_identity(
            items in prop::collection::vec(any::<i32>(), 0..20),
        ) {
            prop_assert_eq!(rotate_right(&items, items.len().max(1)), items);
        }

        /// Property: unique_order never emits a value twice, and keeps the
        /// input's relative order
        #[test]
        fn prop_unique_order_has_no_duplicates(
            items in prop::collection::vec(0u8..10, 0..30),
        ) {
            let unique = unique_order(&items);

            let mut sorted = unique.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(unique.len(), sorted.len());

            // relative order: each element appears at increasing first-index
            let positions: Vec<usize> = unique
                .iter()
                .map(|u| items.iter().position(|i| i == u).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        /// Property: a string glued to its own reverse is a palindrome
        #[test]
        fn prop_mirrored_strings_are_palindromes(s in arb_alnum()) {
            let reversed: String = s.chars().rev().collect();
            let mirrored = format!("{s}{reversed}");
            let mirrored_odd = format!("{s}x{reversed}");
            prop_assert!(is_palindrome(&mirrored));
            prop_assert!(is_palindrome(&mirrored_odd));
        }

        /// Property: a string and its reverse are anagrams
        #[test]
        fn prop_reversal_preserves_anagram(s in arb_alnum()) {
            let reversed: String = s.chars().rev().collect();
            prop_assert!(is_anagram(&s, &reversed));
        }

        /// Property: flattening one level preserves the total element count
        #[test]
        fn prop_flatten_preserves_count(
            nested in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..5), 0..5),
        ) {
            let total: usize = nested.iter().map(Vec::len).sum();
            prop_assert_eq!(flatten_one_level(&nested).len(), total);
        }

        /// Property: fizzbuzz has one entry per number and every 15th entry
        /// is FizzBuzz
        #[test]
        fn prop_fizzbuzz_shape(n in 0u32..200) {
            let seq = fizzbuzz(n);
            prop_assert_eq!(seq.len(), n as usize);
            for (i, item) in seq.iter().enumerate() {
                let number = i as u32 + 1;
                if number % 15 == 0 {
                    prop_assert_eq!(*item, FizzBuzz::FizzBuzz);
                }
            }
        }

        /// Property: average times length recovers the sum
        #[test]
        fn prop_stats_average_is_sum_over_length(
            nums in prop::collection::vec(-1000.0f64..1000.0, 1..50),
        ) {
            let (sum, avg) = stats(&nums);
            prop_assert!((avg * nums.len() as f64 - sum).abs() < 1e-6);
        }
    }
}
