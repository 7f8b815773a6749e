//! Email extraction with a regular expression.

use regex::Regex;
use std::sync::LazyLock;

// Deliberately loose: good enough for scanning prose, not an RFC 5322
// validator.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

/// Extract all email addresses from `text`, in document order.
///
/// Duplicates are kept; combine with
/// [`unique_order`](crate::week01::unique_order) to deduplicate.
///
/// # Examples
///
/// ```rust
/// use praxis_exercises::week02::extract_emails;
///
/// let text = "Contact support@example.com or sales@company.org";
/// assert_eq!(
///     extract_emails(text),
///     vec!["support@example.com", "sales@company.org"]
/// );
/// ```
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL
        .find_iter(text)
        .map(|m| m.as_str().to_owned())
        .collect()
}
