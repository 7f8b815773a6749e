//! String exercises: palindromes, run-length encoding, anagrams, and
//! character frequencies.

use std::collections::HashMap;

/// Check whether a string is a palindrome, ignoring case and any character
/// that is not ASCII alphanumeric.
///
/// The empty string (and any string that is empty after cleaning) counts as
/// a palindrome.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::is_palindrome;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(is_palindrome("racecar"));
/// assert!(!is_palindrome("hello"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Compress a string with run-length encoding.
///
/// Each run of equal characters becomes the character followed by its count,
/// so `"aaabbc"` becomes `"a3b2c1"`. The empty string compresses to itself.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::rle_compress;
///
/// assert_eq!(rle_compress("aaabbc"), "a3b2c1");
/// assert_eq!(rle_compress("hello"), "h1e1l2o1");
/// ```
pub fn rle_compress(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::new();
    let mut current = first;
    let mut count: usize = 1;

    for c in chars {
        if c == current {
            count += 1;
        } else {
            out.push(current);
            out.push_str(&count.to_string());
            current = c;
            count = 1;
        }
    }
    out.push(current);
    out.push_str(&count.to_string());

    out
}

/// Check whether two strings are anagrams, ignoring case and whitespace.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::is_anagram;
///
/// assert!(is_anagram("listen", "silent"));
/// assert!(!is_anagram("hello", "world"));
/// ```
pub fn is_anagram(s1: &str, s2: &str) -> bool {
    fn char_counts(s: &str) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for c in s
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
        {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    char_counts(s1) == char_counts(s2)
}

/// Count how often each character occurs in a string.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week01::freq_counter;
///
/// let counts = freq_counter("hello");
/// assert_eq!(counts[&'l'], 2);
/// assert_eq!(counts[&'h'], 1);
/// ```
pub fn freq_counter(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
