//! Where quotes come from.
//!
//! `QuoteSource` is the widget's only suspension point: one call, one answer.
//! `HttpQuoteSource` issues a single blocking GET against the quote service.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::QuoteError;
use crate::net::{DEFAULT_ENDPOINT, default_timeout};
use crate::quote::Quote;
use crate::result::Result;

/// Produces one quote per call.
pub trait QuoteSource {
    /// Fetch a quote. Implementations must not retry.
    fn fetch(&self) -> Result<Quote>;
}

impl<S: QuoteSource + ?Sized> QuoteSource for &S {
    fn fetch(&self) -> Result<Quote> {
        (**self).fetch()
    }
}

/// Connection settings for `HttpQuoteSource`.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Full URL of the random-quote endpoint.
    pub endpoint: String,
    /// Timeout covering connect, request, and body.
    pub timeout: Duration,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_env_proxy: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout: default_timeout(),
            use_env_proxy: true,
        }
    }
}

impl SourceConfig {
    /// Replace the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = String::from(endpoint);
        self
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Connect directly, ignoring any proxy configured in the environment.
    pub fn without_proxy(mut self) -> Self {
        self.use_env_proxy = false;
        self
    }
}

/// Fetches quotes from the remote quote service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: Client,
    endpoint: String,
}

impl HttpQuoteSource {
    /// Build the HTTP client for `config`.
    pub fn new(config: SourceConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout);
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(HttpQuoteSource {
            client,
            endpoint: config.endpoint,
        })
    }

    /// Endpoint this source requests.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Quote> {
        debug!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        Quote::from_json_slice(&body)
    }
}
