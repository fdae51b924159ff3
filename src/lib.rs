// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Formatting and view-model helpers for Terra blockchain explorers.
//!
//! The core of the crate is a fixed-point formatting engine for
//! micro-denominated on-chain amounts (`1 Luna == 1_000_000 uluna`), built on
//! [`bigdecimal`] so large balances never pass through binary floating point.
//! Around it sit the display helpers an explorer front end needs: denom labels,
//! coin strings, dates, truncated addresses, a fee/gas calculator driven by the
//! live gas price table, live block height state, chart filters, vote tables
//! and transaction error helpers.
//!
//! # Example
//!
//! ```rust
//! use terra_display::{amount, coin, denom, AmountConfig, Coin};
//!
//! assert_eq!(amount("1000000", AmountConfig::default()), "1.000000");
//! assert_eq!(amount("1000000", AmountConfig::INTEGER), "1");
//! assert_eq!(denom("ukrw"), "KRT");
//!
//! let balance = Coin::new("1234567890", "uluna");
//! assert_eq!(coin(&balance, AmountConfig::default()), "1,234.567890 Luna");
//! ```

pub mod chart;
pub mod config;
pub mod errors;
pub mod fee;
pub mod finder;
pub mod format;
pub mod memo;
pub mod socket;
mod spans;
pub mod tx;
pub mod types;
pub mod votes;

pub use config::{ExplorerConfig, ExplorerConfigBuilder};
pub use errors::{
    ApiError, ApiErrorBody, ConfigError, DateFormatError, DisplayError, PostError,
};
pub use fee::{FeeCalculator, FeeCalculatorCache};
pub use finder::{Finder, LinkKind};
pub use format::{
    amount, amount_n, coin, date, date_in, decimal, decimal_n, denom, denom_with, display,
    display_with, to_amount, to_input, truncate, AmountConfig, CurrencySet, DateConfig,
    DateInput, DEFAULT_PRECISION,
};
pub use memo::Memo;
pub use socket::{BlockDisplay, BlockWatcher, LiveFeed, SocketView};
pub use types::{Coin, DisplayCoin, GasPrice, GasPrices};
