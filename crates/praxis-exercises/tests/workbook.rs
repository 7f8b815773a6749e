//! Exercises used together with the shared helpers, the way the workbook's
//! driver scripts combine them.

use praxis_exercises::week01::{freq_counter, rle_compress, stats};
use praxis_exercises::week02::extract_emails;
use praxis_util::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

#[test]
fn memoized_frequency_count_computes_each_text_once() {
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = Arc::clone(&calls);

    let mut counted = Memoized::new(move |text: &String| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        freq_counter(text)
    });

    let first = counted.call("mississippi".to_string());
    assert_eq!(first[&'s'], 4);

    let second = counted.call("mississippi".to_string());
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn retrying_wrapper_recovers_a_flaky_compression() {
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = Arc::clone(&calls);

    let backoff = ExponentialBackoff::builder()
        .max_attempts(3)
        .base_delay(Duration::from_millis(1))
        .build();

    let mut compress = Retrying::new(backoff, "compress", move |input: &String| {
        if calls_clone.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(std::io::Error::other("storage not ready"))
        } else {
            Ok(rle_compress(input))
        }
    });

    assert_eq!(compress.call("aaabbc".to_string()).unwrap(), "a3b2c1");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn timed_stats_returns_the_untouched_result() {
    let nums = [1.0, 2.0, 3.0, 4.0, 5.0];
    let ((sum, avg), _took) = timed("stats", || stats(&nums));
    assert_eq!(sum, 15.0);
    assert_eq!(avg, 3.0);
}

#[test]
fn extracted_emails_round_trip_through_line_files() {
    let dir = std::env::temp_dir().join(format!("praxis-workbook-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("emails.txt");

    let text = "Write to ada@example.com and grace@example.org.";
    write_lines(&path, &extract_emails(text)).unwrap();

    assert_eq!(
        read_lines(&path).unwrap(),
        vec!["ada@example.com", "grace@example.org"]
    );

    let file_stats = count_file_stats(&path).unwrap();
    assert_eq!(file_stats.lines, 2);
    assert_eq!(file_stats.words, 2);

    std::fs::remove_dir_all(&dir).ok();
}
