//! Shared constants for end-to-end tests

/// Timeout for individual HTTP requests made by the test client.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
