//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quote_common::net::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use quote_common::{SourceConfig, TargetId};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL of the random-quote endpoint.
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Ignore HTTP(S)_PROXY from the environment.
    #[clap(long)]
    pub no_proxy: bool,

    /// Leave a display target off the page. May be repeated.
    #[clap(long, value_enum)]
    pub omit: Vec<TargetId>,

    /// Print the displayed quote as a JSON object.
    #[clap(long)]
    pub json: bool,
}

impl Args {
    /// Quote source settings derived from the flags.
    pub fn source_config(&self) -> SourceConfig {
        let endpoint = self.endpoint.trim().trim_matches('"');
        let config = SourceConfig::default()
            .with_endpoint(endpoint)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if self.no_proxy {
            config.without_proxy()
        } else {
            config
        }
    }

    /// Targets the page should carry after applying `--omit`.
    pub fn page_targets(&self) -> Vec<TargetId> {
        TargetId::ALL
            .into_iter()
            .filter(|id| !self.omit.contains(id))
            .collect()
    }
}
