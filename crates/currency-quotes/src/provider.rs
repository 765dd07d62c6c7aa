//! Quote provider abstraction.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;

/// Source of market prices. Implementations map to a data vendor (e.g. Yahoo Finance).
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Returns the most recent close for every ticker over `period` (e.g. `"1d"`), keyed by ticker.
    /// Fails as a whole if any ticker cannot be resolved.
    async fn latest_closes(&self, tickers: &[String], period: &str)
        -> Result<HashMap<String, f64>>;
}
