//! Quote Client — a terminal host for the quote widget. It builds an in-memory page
//! with the `quote-content` and `quote-author` targets, lets the widget fetch one
//! random quote (or fall back to the Cicero quote), and prints what ended up shown.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --timeout-secs 5
//! quote_client --endpoint http://localhost:8080/quotes/random --json
//! quote_client --omit quote-author   # widget is a no-op, prints nothing
//! ```
#![warn(missing_docs)]
mod args;

use std::io::{self, Write};

use crate::args::Args;
use clap::Parser;
use log::info;
use quote_common::{
    DisplayedQuote, HttpQuoteSource, Page, QuoteError, Result, TargetId, init_quote_widget,
};

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let page = Page::with_targets(&args.page_targets());
    let source = HttpQuoteSource::new(args.source_config())?;
    info!("Quote endpoint: {}", source.endpoint());

    match init_quote_widget(&page, source) {
        Some(outcome) => {
            info!("Quote widget finished: {:?}", outcome);
            let stdout = io::stdout();
            render(&page, args.json, &mut stdout.lock())
        }
        None => {
            info!("Page has no quote targets; nothing to show.");
            Ok(())
        }
    }
}

/// Write the two displayed strings to `out`, either as two lines or as one JSON object.
fn render<W: Write>(page: &Page, json: bool, out: &mut W) -> Result<(), QuoteError> {
    let shown = DisplayedQuote {
        content: page.text_of(TargetId::Content).unwrap_or_default(),
        author: page.text_of(TargetId::Author).unwrap_or_default(),
    };

    if json {
        serde_json::to_writer(&mut *out, &shown)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", shown.content)?;
        writeln!(out, "{}", shown.author)?;
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
