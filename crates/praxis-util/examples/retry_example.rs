//! Example: retrying a flaky operation and memoizing the result
//!
//! This example demonstrates:
//! 1. Exponential backoff around an unreliable call
//! 2. Caching the recovered result so repeats are free
//! 3. Timing the whole thing with `Timer`
//!
//! Run with:
//! ```bash
//! cargo run -p praxis-util --example retry_example
//! ```

use praxis_util::prelude::*;
use std::cell::Cell;
use std::time::Duration;

/// A simulated API that fails the first few times.
struct UnreliableApi {
    attempts: Cell<u32>,
    fail_count: u32,
}

impl UnreliableApi {
    fn new(fail_count: u32) -> Self {
        Self {
            attempts: Cell::new(0),
            fail_count,
        }
    }

    fn call(&self, key: u32) -> std::io::Result<String> {
        let attempt = self.attempts.get();
        self.attempts.set(attempt + 1);

        if attempt < self.fail_count {
            println!("  attempt {}: FAILED (simulated transient error)", attempt + 1);
            Err(std::io::Error::other(format!(
                "transient error on attempt {}",
                attempt + 1
            )))
        } else {
            println!("  attempt {}: SUCCESS", attempt + 1);
            Ok(format!("payload for key {key}"))
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let api = UnreliableApi::new(2);
    let backoff = ExponentialBackoff::builder()
        .max_attempts(4)
        .base_delay(Duration::from_millis(50))
        .build();

    let timer = Timer::start("fetch with retry and cache");

    let mut fetch = TryMemoized::new(move |key: &u32| backoff.execute(|| api.call(*key)));

    println!("first call (goes to the API, with retries):");
    match fetch.call(7) {
        Ok(payload) => println!("  got: {payload}"),
        Err(err) => println!("  gave up: {err}"),
    }

    println!("second call (served from the memo table):");
    match fetch.call(7) {
        Ok(payload) => println!("  got: {payload}"),
        Err(err) => println!("  gave up: {err}"),
    }

    println!("total elapsed: {:?}", timer.stop());
}
