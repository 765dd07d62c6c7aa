//! Yahoo Finance chart API client implementing [`QuoteProvider`].
//!
//! One `GET {base}/v8/finance/chart/{ticker}?range={period}&interval=1d` per ticker; tickers are
//! fetched concurrently. The latest close is the last non-null entry of
//! `indicators.quote[0].close`, falling back to `meta.regularMarketPrice`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::config::QuoteConfig;
use crate::error::{QuoteError, Result};
use crate::provider::QuoteProvider;

const USER_AGENT: &str = concat!("Mozilla/5.0 (compatible; origami-bot/", env!("CARGO_PKG_VERSION"), ")");

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Option<ChartMeta>,
    #[serde(default)]
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice", default)]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteIndicator>,
}

#[derive(Debug, Deserialize)]
struct QuoteIndicator {
    #[serde(default)]
    close: Option<Vec<Option<f64>>>,
}

/// Extracts the latest close from a chart response body.
fn latest_close_from_body(ticker: &str, body: &str) -> Result<f64> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;

    if let Some(err) = envelope.chart.error {
        return Err(QuoteError::Api {
            ticker: ticker.to_string(),
            description: format!("{}: {}", err.code, err.description),
        });
    }

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| QuoteError::NoData(ticker.to_string()))?;

    let last_close = result
        .indicators
        .and_then(|ind| ind.quote.into_iter().next())
        .and_then(|q| q.close)
        .and_then(|closes| closes.into_iter().rev().flatten().next());

    last_close
        .or_else(|| result.meta.and_then(|m| m.regular_market_price))
        .ok_or_else(|| QuoteError::NoData(ticker.to_string()))
}

/// Yahoo Finance chart client. Cheap to clone (shares the reqwest connection pool).
#[derive(Clone)]
pub struct YahooQuoteProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooQuoteProvider {
    /// Builds a provider with the given API base URL and per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| QuoteError::Config(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds a provider from a [`QuoteConfig`].
    pub fn from_config(config: &dyn QuoteConfig) -> Result<Self> {
        Self::new(config.api_url(), config.timeout())
    }

    #[instrument(skip(self))]
    async fn latest_close(&self, ticker: &str, period: &str) -> Result<f64> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);
        let response = self
            .client
            .get(&url)
            .query(&[("range", period), ("interval", "1d")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status {
                ticker: ticker.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let close = latest_close_from_body(ticker, &body)?;
        debug!(ticker = %ticker, close = close, "Quote fetched");
        Ok(close)
    }
}

#[async_trait]
impl QuoteProvider for YahooQuoteProvider {
    async fn latest_closes(
        &self,
        tickers: &[String],
        period: &str,
    ) -> Result<HashMap<String, f64>> {
        info!(
            tickers = ?tickers,
            period = %period,
            base_url = %self.base_url,
            "Fetching latest closes"
        );
        let fetches = tickers
            .iter()
            .map(|ticker| self.latest_close(ticker, period));
        let closes = futures::future::try_join_all(fetches).await?;
        Ok(tickers.iter().cloned().zip(closes).collect())
    }
}
