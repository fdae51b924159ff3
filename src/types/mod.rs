// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for on-chain records consumed by the display helpers.
//!
//! This module provides the shapes the explorer API hands us:
//! - Coins (raw base-unit amount + denom code) and their display form
//! - Gas prices, as a single price and as the per-denom price table

mod coin;
mod gas;

pub use coin::{Coin, DisplayCoin};
pub use gas::{GasPrice, GasPrices};
