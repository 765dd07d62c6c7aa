//! # Currency quotes
//!
//! Latest SGD exchange rates for the `/currencies` command.
//!
//! - [`QuoteProvider`]: fetches the latest close per ticker over a lookback period.
//! - [`YahooQuoteProvider`]: [`QuoteProvider`] backed by the Yahoo Finance chart API (reqwest).
//! - [`QuoteFormatter`]: asks the provider for the fixed currency set and renders the reply text.
//! - [`EnvQuoteConfig`]: API base URL, request timeout and period, loaded from env.
//!
//! Rates are fetched fresh on every request; nothing is cached or retried.

mod config;
mod error;
mod formatter;
mod provider;
mod yahoo;

pub use config::{EnvQuoteConfig, QuoteConfig, DEFAULT_QUOTE_API_URL};
pub use error::{QuoteError, Result};
pub use formatter::{
    format_rate_line, Currency, QuoteFormatter, QuoteSet, BASE_CURRENCY, QUOTES_HEADER,
    QUOTES_UNAVAILABLE_MESSAGE,
};
pub use provider::QuoteProvider;
pub use yahoo::YahooQuoteProvider;
