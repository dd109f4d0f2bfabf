//! The quote widget.
//!
//! `QuoteWidget` owns the two display targets and a quote source. Loading it makes
//! exactly one fetch and always leaves both targets populated: with the fetched quote
//! on success, with the Cicero fallback on any failure. Nothing ever escapes `load`.
use log::{debug, error, info};

use crate::display::{DisplayHost, DisplayTarget, TargetId};
use crate::quote::DisplayedQuote;
use crate::source::QuoteSource;

/// What ended up in the display targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The fetched quote is shown.
    Remote,
    /// The fetch failed and the fallback quote is shown.
    Fallback,
}

/// Quote widget bound to its display targets and quote source.
pub struct QuoteWidget<T, S> {
    content: T,
    author: T,
    source: S,
}

impl<T: DisplayTarget, S: QuoteSource> QuoteWidget<T, S> {
    /// Bind the widget to explicitly supplied targets.
    ///
    /// Returns `None` when either target is missing. Pages that do not carry the
    /// widget simply get nothing, and no request is made.
    pub fn new(content: Option<T>, author: Option<T>, source: S) -> Option<Self> {
        Some(QuoteWidget {
            content: content?,
            author: author?,
            source,
        })
    }

    /// Look up `quote-content` and `quote-author` in `host` and bind to them.
    pub fn attach<H>(host: &H, source: S) -> Option<Self>
    where
        H: DisplayHost<Target = T>,
    {
        let widget = Self::new(
            host.target(TargetId::Content),
            host.target(TargetId::Author),
            source,
        );
        if widget.is_none() {
            debug!("Quote targets not present, widget disabled");
        }
        widget
    }

    /// Fetch once and populate both targets.
    pub fn load(self) -> Outcome {
        let (shown, outcome) = match self.source.fetch() {
            Ok(quote) => {
                info!("Fetched quote by {}", quote.author);
                (DisplayedQuote::from_remote(&quote), Outcome::Remote)
            }
            Err(e) => {
                error!("Failed to fetch quote: {}", e);
                (DisplayedQuote::fallback(), Outcome::Fallback)
            }
        };

        self.content.set_text(&shown.content);
        self.author.set_text(&shown.author);
        outcome
    }
}

/// Attach to `host` and load immediately. `None` means the widget was a no-op.
pub fn init_quote_widget<H, S>(host: &H, source: S) -> Option<Outcome>
where
    H: DisplayHost,
    S: QuoteSource,
{
    QuoteWidget::attach(host, source).map(QuoteWidget::load)
}
