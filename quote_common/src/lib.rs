//!
//! Quote widget library: fetches a random quote and shows it in two display targets.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError`.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` payload and its displayed form.
//! - `display` — display targets and the host that owns them.
//! - `source` — where quotes come from (`HttpQuoteSource` for the real service).
//! - `widget` — `QuoteWidget`, which ties the above together.
//! - `net` — endpoint and timeout defaults.
#![warn(missing_docs)]
pub mod display;
pub mod error;
pub mod net;
pub mod quote;
pub mod result;
pub mod source;
pub mod widget;

pub use display::{DisplayHost, DisplayTarget, Page, TargetId, TextSlot};
pub use error::QuoteError;
pub use quote::{DisplayedQuote, Quote};
pub use result::Result;
pub use source::{HttpQuoteSource, QuoteSource, SourceConfig};
pub use widget::{Outcome, QuoteWidget, init_quote_widget};
