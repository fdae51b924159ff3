// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display formatting for on-chain values
//!
//! # Data flow
//!
//! ```text
//! Coin { amount: "1234567890", denom: "uluna" }
//!     |                         |
//!     | amount() (÷ 10^6,       | denom()
//!     |   round down)           |
//!     ↓                         ↓
//! "1,234.567890"              "Luna"
//!     \_________ display() ____/
//!                 ↓
//!        "1,234.567890 Luna"
//! ```
//!
//! Every function here is pure and synchronous. None of them fail on
//! malformed amounts or denoms; only [`date`] reports unparseable input.

mod coin;
mod date;
mod decimal;
mod denom;
mod truncate;

pub use coin::{coin, display, display_with};
pub use date::{date, date_in, DateConfig, DateInput, LOCAL_ZONE_LABEL};
pub use decimal::{
    amount, amount_n, decimal, decimal_n, to_amount, to_input, AmountConfig, DEFAULT_PRECISION,
};
pub use denom::{denom, denom_with, CurrencySet};
pub use truncate::truncate;

pub(crate) use decimal::{integer_string, parse_or_zero};
