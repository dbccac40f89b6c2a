//! Helpers for controlling live MongoDB test behaviour.
//!
//! Suites that need a real `mongod` run only when `MONGO_TEST_URI` names one.
//! When it is set but the server cannot be reached, the suite fails unless
//! `SKIP_TEST_CLUSTER` is truthy, so CI breakage is not masked.

/// Environment variable naming the server used by live-store suites.
pub const MONGO_TEST_URI: &str = "MONGO_TEST_URI";

/// Returns true when the `SKIP_TEST_CLUSTER` environment variable is set to a
/// truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// The configured live-store URI, or `None` (with a skip marker) when unset.
pub fn mongo_test_uri() -> Option<String> {
    match std::env::var(MONGO_TEST_URI) {
        Ok(uri) if !uri.trim().is_empty() => Some(uri),
        _ => {
            eprintln!("SKIP-TEST-CLUSTER: {MONGO_TEST_URI} is not set");
            None
        }
    }
}

/// Handles store setup failures consistently across integration tests.
///
/// When `SKIP_TEST_CLUSTER` is truthy, prints a skip marker and returns `None`.
/// Otherwise, panics with a clear failure message.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test store setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
