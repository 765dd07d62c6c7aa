//! Quote configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Default chart API base URL.
pub const DEFAULT_QUOTE_API_URL: &str = "https://query1.finance.yahoo.com";

/// Quote provider configuration.
pub trait QuoteConfig: Send + Sync {
    fn api_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn period(&self) -> &str;
}

/// Quote config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvQuoteConfig {
    pub quote_api_url: String,
    pub quote_timeout_secs: u64,
    pub quote_period: String,
}

impl QuoteConfig for EnvQuoteConfig {
    fn api_url(&self) -> &str {
        &self.quote_api_url
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.quote_timeout_secs)
    }
    fn period(&self) -> &str {
        &self.quote_period
    }
}

impl Default for EnvQuoteConfig {
    fn default() -> Self {
        Self {
            quote_api_url: DEFAULT_QUOTE_API_URL.to_string(),
            quote_timeout_secs: 10,
            quote_period: "1d".to_string(),
        }
    }
}

impl EnvQuoteConfig {
    /// Load from environment variables: QUOTE_API_URL, QUOTE_TIMEOUT_SECS, QUOTE_PERIOD.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let quote_api_url = env::var("QUOTE_API_URL").unwrap_or(defaults.quote_api_url);
        let quote_timeout_secs = match env::var("QUOTE_TIMEOUT_SECS") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("QUOTE_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => defaults.quote_timeout_secs,
        };
        let quote_period = env::var("QUOTE_PERIOD")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.quote_period);
        Ok(Self {
            quote_api_url,
            quote_timeout_secs,
            quote_period,
        })
    }

    /// Validate: URL must parse, timeout must be non-zero.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.quote_api_url).is_err() {
            anyhow::bail!("QUOTE_API_URL is not a valid URL: {}", self.quote_api_url);
        }
        if self.quote_timeout_secs == 0 {
            anyhow::bail!("QUOTE_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("QUOTE_API_URL");
        env::remove_var("QUOTE_TIMEOUT_SECS");
        env::remove_var("QUOTE_PERIOD");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = EnvQuoteConfig::from_env().unwrap();
        assert_eq!(config.api_url(), DEFAULT_QUOTE_API_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.period(), "1d");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("QUOTE_API_URL", "http://127.0.0.1:9000");
        env::set_var("QUOTE_TIMEOUT_SECS", "3");
        env::set_var("QUOTE_PERIOD", "5d");

        let config = EnvQuoteConfig::from_env().unwrap();
        assert_eq!(config.api_url(), "http://127.0.0.1:9000");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.period(), "5d");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric_timeout() {
        clear_env();
        env::set_var("QUOTE_TIMEOUT_SECS", "soon");
        assert!(EnvQuoteConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_validate_rejects_bad_url_and_zero_timeout() {
        let bad_url = EnvQuoteConfig {
            quote_api_url: "not a url".to_string(),
            ..EnvQuoteConfig::default()
        };
        assert!(bad_url.validate().is_err());

        let zero_timeout = EnvQuoteConfig {
            quote_timeout_secs: 0,
            ..EnvQuoteConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }
}
