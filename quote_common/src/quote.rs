//! Quote payload received from the quote service and its displayed form.
//!
//! Quotes arrive as JSON (`{"quote": ..., "author": ..., ...}`) and are decoded via
//! `serde_json`. Extra fields in the payload are ignored.
use serde::{Deserialize, Serialize};

use crate::result::Result;

/// Body of the fallback quote.
pub const FALLBACK_TEXT: &str = "A room without books is like a body without a soul.";
/// Author of the fallback quote.
pub const FALLBACK_AUTHOR: &str = "Marcus Tullius Cicero";

/// A quote and the person it is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// Quote body.
    #[serde(rename = "quote")]
    pub text: String,
    /// Attributed author.
    pub author: String,
}

impl Quote {
    /// Creates a quote from its parts.
    pub fn new(text: &str, author: &str) -> Self {
        Quote {
            text: String::from(text),
            author: String::from(author),
        }
    }

    /// The fixed Cicero quote used when the service is unavailable.
    pub fn fallback() -> Self {
        Quote::new(FALLBACK_TEXT, FALLBACK_AUTHOR)
    }

    /// Decode a quote from a JSON response body.
    pub fn from_json_slice(body: &[u8]) -> Result<Quote> {
        let quote = serde_json::from_slice(body)?;
        Ok(quote)
    }
}

/// The two strings actually written into the display targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedQuote {
    /// Text for the `quote-content` target.
    pub content: String,
    /// Text for the `quote-author` target.
    pub author: String,
}

impl DisplayedQuote {
    /// Formats a quote fetched from the service.
    ///
    /// The content keeps a single space after the opening quotation mark, so
    /// `Life is short.` becomes `" Life is short."`.
    pub fn from_remote(quote: &Quote) -> Self {
        DisplayedQuote {
            content: format!("\" {}\"", quote.text),
            author: format!("- {}", quote.author),
        }
    }

    /// The fallback pair. Unlike remote quotes there is no leading space.
    pub fn fallback() -> Self {
        DisplayedQuote {
            content: format!("\"{}\"", FALLBACK_TEXT),
            author: format!("- {}", FALLBACK_AUTHOR),
        }
    }
}
