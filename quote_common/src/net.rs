//! Networking constants for the remote quote service.

use std::time::Duration;

/// Endpoint returning one random quote as `{"quote": ..., "author": ...}`.
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/quotes/random";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// `DEFAULT_TIMEOUT_SECS` as a `Duration`.
pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}
