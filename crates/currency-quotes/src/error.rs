//! Quote fetch errors.

use thiserror::Error;

/// Why a quote lookup failed. All variants end up as the same user-facing reply; the variant is
/// only used for logging.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Quote request timed out")]
    Timeout,

    #[error("Unexpected HTTP status {status} for {ticker}")]
    Status { ticker: String, status: u16 },

    #[error("Quote API error for {ticker}: {description}")]
    Api { ticker: String, description: String },

    #[error("Failed to parse quote response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No close price for {0}")]
    NoData(String),

    #[error("Provider returned no quote for {0}")]
    MissingTicker(String),

    #[error("Invalid quote config: {0}")]
    Config(String),
}

impl QuoteError {
    /// Short tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::Http(_) => "http",
            QuoteError::Timeout => "timeout",
            QuoteError::Status { .. } => "status",
            QuoteError::Api { .. } => "api",
            QuoteError::Parse(_) => "parse",
            QuoteError::NoData(_) => "no_data",
            QuoteError::MissingTicker(_) => "missing_ticker",
            QuoteError::Config(_) => "config",
        }
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            QuoteError::Timeout
        } else {
            QuoteError::Http(e)
        }
    }
}

/// Result type for quote operations; uses [`QuoteError`].
pub type Result<T> = std::result::Result<T, QuoteError>;
