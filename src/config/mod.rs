//! Configuration for terra-display
//!
//! This module provides the explorer configuration: which fiat currency codes
//! fold into stablecoin tickers, which chain the finder links point at, and
//! the chart durations offered by default.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use terra_display::ExplorerConfig;
//!
//! let config = ExplorerConfig::default();
//! assert_eq!(config.chain, "mainnet");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use terra_display::ExplorerConfigBuilder;
//!
//! let config = ExplorerConfigBuilder::new()
//!     .chain("testnet")
//!     .currencies(["KRW", "USD"])
//!     .build();
//!
//! assert_eq!(config.currency_set().label("ukrw"), "KRT");
//! assert_eq!(config.currency_set().label("ueur"), "EUR");
//! ```
//!
//! # Example: Loading from JSON
//!
//! ```rust
//! use terra_display::ExplorerConfig;
//!
//! let config = ExplorerConfig::from_json_str(r#"{ "chain": "bombay-12" }"#).unwrap();
//! assert_eq!(config.chain, "bombay-12");
//! assert!(!config.currencies.is_empty()); // falls back to the built-in list
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::OptionConfig;
use crate::errors::ConfigError;
use crate::finder::Finder;
use crate::format::CurrencySet;

pub mod constants;

/// Configuration for explorer formatting
///
/// Loaded once at startup and treated as read-only afterwards. Use
/// [`ExplorerConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Fiat currency codes displayed as stablecoin tickers
    /// Default: [`constants::CURRENCIES`]
    pub currencies: Vec<String>,

    /// Chain segment used in finder links
    /// Default: `"mainnet"`
    pub chain: String,

    /// Chart durations (days) offered when a chart has no list of its own
    /// Default: `[0, 7, 14, 30]`
    pub chart_durations: Vec<u32>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            currencies: constants::CURRENCIES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            chain: constants::DEFAULT_CHAIN.to_string(),
            chart_durations: constants::DEFAULT_CHART_DURATIONS.to_vec(),
        }
    }
}

impl ExplorerConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            currencies = config.currencies.len(),
            chain = %config.chain,
            "Loaded explorer config"
        );
        Ok(config)
    }

    /// Check the invariants the formatting helpers depend on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain.trim().is_empty() {
            return Err(ConfigError::invalid("chain must not be empty"));
        }

        if let Some(code) = self
            .currencies
            .iter()
            .find(|code| code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return Err(ConfigError::invalid(format!(
                "currency code {code:?} must be non-empty ASCII letters"
            )));
        }

        Ok(())
    }

    /// Build the currency lookup used by [`denom_with`](crate::denom_with)
    pub fn currency_set(&self) -> CurrencySet {
        CurrencySet::new(self.currencies.iter().map(String::as_str))
    }

    /// Build a finder for the configured chain
    pub fn finder(&self) -> Finder {
        Finder::new(self.chain.clone())
    }

    /// Duration filter offering the configured chart durations
    ///
    /// ```rust
    /// use terra_display::ExplorerConfigBuilder;
    ///
    /// let config = ExplorerConfigBuilder::new().chart_durations([1, 7]).build();
    /// let durations = config.duration_options(Some(7));
    /// assert_eq!(durations.list, Some(vec![1, 7]));
    /// assert_eq!(durations.initial, Some(7));
    /// ```
    pub fn duration_options(&self, initial: Option<u32>) -> OptionConfig<u32> {
        OptionConfig {
            initial,
            list: Some(self.chart_durations.clone()),
        }
    }
}

/// Builder for [`ExplorerConfig`]
///
/// # Example
///
/// ```rust
/// use terra_display::ExplorerConfigBuilder;
///
/// let config = ExplorerConfigBuilder::new()
///     .chain("columbus-5")
///     .chart_durations([0, 1, 7])
///     .build();
///
/// assert_eq!(config.chart_durations, vec![0, 1, 7]);
/// ```
#[derive(Debug, Default)]
pub struct ExplorerConfigBuilder {
    config: ExplorerConfig,
}

impl ExplorerConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the finder chain segment
    pub fn chain(mut self, chain: impl Into<String>) -> Self {
        self.config.chain = chain.into();
        self
    }

    /// Replace the recognised currency codes
    pub fn currencies<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.currencies = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Add one currency code to the recognised set
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.config.currencies.push(code.into());
        self
    }

    /// Replace the default chart durations
    pub fn chart_durations(mut self, durations: impl IntoIterator<Item = u32>) -> Self {
        self.config.chart_durations = durations.into_iter().collect();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExplorerConfig {
        self.config
    }
}
