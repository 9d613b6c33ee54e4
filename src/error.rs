//! Error types for the data fetcher.

use thiserror::Error;

/// Failures surfaced by a fetch. Nothing here is ever retried; the caller
/// decides how the affected widget degrades.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: timeout, DNS, connection refused.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("remote returned HTTP {status}")]
    Remote { status: u16 },

    /// The response body was not the JSON shape we expected.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}
