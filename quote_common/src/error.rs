//! Error types shared between the widget library and its hosts.
//!
//! The `QuoteError` enum covers every way fetching a quote can fail. The widget
//! itself collapses all of them into a single fallback path; the variants only
//! exist so the diagnostic log line says what actually went wrong.
use std::io;

use thiserror::Error;

/// Unified error type for fetching and decoding quotes.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Transport-level failure: DNS, connect, TLS, timeout, or a broken body stream.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The quote service answered with a non-2xx status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Body was not valid JSON or lacked the `quote`/`author` string fields.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}
