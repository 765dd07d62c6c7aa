//! SGD quote set and reply rendering for `/currencies`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{info, instrument, warn};
use unit_convert::number::{render, round_to};

use crate::error::{QuoteError, Result};
use crate::provider::QuoteProvider;

/// Currency every rate is quoted against.
pub const BASE_CURRENCY: &str = "SGD";

/// First line of the quotes reply.
pub const QUOTES_HEADER: &str = "Currency Information:";

/// Reply sent when quotes cannot be fetched.
pub const QUOTES_UNAVAILABLE_MESSAGE: &str = "Please enter a valid number.";

const RATE_PLACES: i32 = 3;

/// Quoted currencies, in reply order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
    Myr,
    Usd,
    Jpy,
    Hkd,
    Aud,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Myr,
        Currency::Usd,
        Currency::Jpy,
        Currency::Hkd,
        Currency::Aud,
    ];

    /// ISO code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Myr => "MYR",
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
            Currency::Hkd => "HKD",
            Currency::Aud => "AUD",
        }
    }

    /// Label shown in replies.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Myr => "RM",
            Currency::Usd => "USD",
            Currency::Jpy => "YEN",
            Currency::Hkd => "HKD",
            Currency::Aud => "AUD",
        }
    }

    /// Yahoo Finance FX ticker, e.g. `SGDMYR=X`.
    pub fn ticker(self) -> String {
        format!("{}{}=X", BASE_CURRENCY, self.code())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of one quote lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteSet {
    /// Rates for every [`Currency::ALL`] entry, rounded to 3 decimals.
    Available(BTreeMap<Currency, f64>),
    /// Lookup failed; holds the logged reason.
    Unavailable(String),
}

impl QuoteSet {
    /// Reply text for this set.
    pub fn render(&self) -> String {
        match self {
            QuoteSet::Available(rates) => {
                let lines: Vec<String> = rates
                    .iter()
                    .map(|(currency, rate)| format_rate_line(*currency, *rate))
                    .collect();
                format!("{}\n\n{}", QUOTES_HEADER, lines.join("\n"))
            }
            QuoteSet::Unavailable(_) => QUOTES_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, QuoteSet::Available(_))
    }
}

/// `1 SGD is equal to 3.412 RM.`
pub fn format_rate_line(currency: Currency, rate: f64) -> String {
    format!(
        "1 {} is equal to {} {}.",
        BASE_CURRENCY,
        render(rate),
        currency.label()
    )
}

/// Fetches the fixed currency set from a [`QuoteProvider`] and renders the reply.
#[derive(Clone)]
pub struct QuoteFormatter {
    provider: Arc<dyn QuoteProvider>,
    period: String,
}

impl QuoteFormatter {
    pub fn new(provider: Arc<dyn QuoteProvider>, period: impl Into<String>) -> Self {
        Self {
            provider,
            period: period.into(),
        }
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    /// Fetches all rates. Never fails: provider errors become [`QuoteSet::Unavailable`].
    #[instrument(skip(self), fields(period = %self.period))]
    pub async fn fetch(&self) -> QuoteSet {
        match self.fetch_rates().await {
            Ok(rates) => {
                info!(currencies = rates.len(), "Quotes fetched");
                QuoteSet::Available(rates)
            }
            Err(e) => {
                warn!(error_kind = e.kind(), error = %e, "Quote lookup failed");
                QuoteSet::Unavailable(e.to_string())
            }
        }
    }

    /// Fetches and renders in one step.
    pub async fn reply(&self) -> String {
        self.fetch().await.render()
    }

    async fn fetch_rates(&self) -> Result<BTreeMap<Currency, f64>> {
        let tickers: Vec<String> = Currency::ALL.iter().map(|c| c.ticker()).collect();
        let closes = self.provider.latest_closes(&tickers, &self.period).await?;

        let mut rates = BTreeMap::new();
        for (currency, ticker) in Currency::ALL.iter().zip(&tickers) {
            let close = closes
                .get(ticker)
                .copied()
                .ok_or_else(|| QuoteError::MissingTicker(ticker.clone()))?;
            rates.insert(*currency, round_to(close, RATE_PLACES));
        }
        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickers_are_sgd_pairs() {
        let tickers: Vec<String> = Currency::ALL.iter().map(|c| c.ticker()).collect();
        assert_eq!(
            tickers,
            vec!["SGDMYR=X", "SGDUSD=X", "SGDJPY=X", "SGDHKD=X", "SGDAUD=X"]
        );
    }

    #[test]
    fn test_format_rate_line_uses_label() {
        assert_eq!(
            format_rate_line(Currency::Myr, 3.412),
            "1 SGD is equal to 3.412 RM."
        );
        assert_eq!(
            format_rate_line(Currency::Jpy, 110.0),
            "1 SGD is equal to 110.0 YEN."
        );
    }

    #[test]
    fn test_unavailable_renders_fallback_message() {
        let set = QuoteSet::Unavailable("timeout".to_string());
        assert!(!set.is_available());
        assert_eq!(set.render(), QUOTES_UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_available_renders_in_currency_order() {
        let rates: BTreeMap<Currency, f64> = [
            (Currency::Aud, 1.1),
            (Currency::Myr, 3.5),
            (Currency::Usd, 0.74),
            (Currency::Hkd, 5.8),
            (Currency::Jpy, 110.25),
        ]
        .into_iter()
        .collect();
        let text = QuoteSet::Available(rates).render();
        assert_eq!(
            text,
            "Currency Information:\n\n\
             1 SGD is equal to 3.5 RM.\n\
             1 SGD is equal to 0.74 USD.\n\
             1 SGD is equal to 110.25 YEN.\n\
             1 SGD is equal to 5.8 HKD.\n\
             1 SGD is equal to 1.1 AUD."
        );
    }
}
