// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fee and gas conversion at the live gas price
//!
//! Fees round **up** so a transaction never under-pays; gas derived from a fee
//! rounds **down** so a refund estimate never overstates. This is the only
//! place in the crate where anything rounds up.
//!
//! The calculator is unavailable (`None`) until the gas price table has been
//! fetched, which is the signal callers use to show a loading state instead
//! of computing against a zero price.
//!
//! # Example
//!
//! ```rust
//! use terra_display::{FeeCalculator, GasPrices};
//!
//! let prices = GasPrices::new([("uluna", "0.015")]);
//!
//! assert!(FeeCalculator::from_prices(None, "uluna").is_none());
//!
//! let calc = FeeCalculator::from_prices(Some(&prices), "uluna").unwrap();
//! assert_eq!(calc.fee("100001"), "1501"); // 1500.015 rounds up
//! assert_eq!(calc.gas("1501"), "100066"); // 100066.66... rounds down
//! ```

use std::sync::Arc;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::format::{integer_string, parse_or_zero};
use crate::memo::Memo;
use crate::spans;
use crate::types::{GasPrice, GasPrices};

/// Converts between gas units and fee amounts at a fixed price
///
/// Stateless apart from the price it was built with; build a new one (or use
/// [`FeeCalculatorCache`]) when the price changes.
#[derive(Debug, Clone)]
pub struct FeeCalculator {
    gas_price: GasPrice,
    price: BigDecimal,
}

impl FeeCalculator {
    /// Create a calculator for a known gas price
    pub fn new(gas_price: GasPrice) -> Self {
        let price = parse_or_zero(&gas_price.amount);
        Self { gas_price, price }
    }

    /// Create a calculator from the fetched price table
    ///
    /// Returns `None` while the table is not loaded. A loaded table without
    /// an entry for `denom` yields a calculator at price zero.
    pub fn from_prices(prices: Option<&GasPrices>, denom: &str) -> Option<Self> {
        let prices = prices?;
        let amount = prices.get(denom).unwrap_or("0");
        Some(Self::new(GasPrice::new(amount, denom)))
    }

    /// The price this calculator was built with
    pub fn gas_price(&self) -> &GasPrice {
        &self.gas_price
    }

    /// Fee for `gas` units: `ceil(gas * price)`
    ///
    /// # Examples
    ///
    /// ```
    /// use terra_display::{FeeCalculator, GasPrice};
    ///
    /// let calc = FeeCalculator::new(GasPrice::new("0.015", "uluna"));
    /// assert_eq!(calc.fee("100000"), "1500");
    /// assert_eq!(calc.fee("1"), "1");
    /// ```
    pub fn fee(&self, gas: &str) -> String {
        let product = parse_or_zero(gas) * &self.price;
        integer_string(&product.with_scale_round(0, RoundingMode::Ceiling))
    }

    /// Gas units covered by `fee`: `floor(fee / price)`
    ///
    /// Returns `"0"` when the price is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use terra_display::{FeeCalculator, GasPrice};
    ///
    /// let calc = FeeCalculator::new(GasPrice::new("0.015", "uluna"));
    /// assert_eq!(calc.gas("1500"), "100000");
    /// assert_eq!(calc.gas("1"), "66");
    /// ```
    pub fn gas(&self, fee: &str) -> String {
        let zero = BigDecimal::from(0);
        if self.price <= zero {
            tracing::warn!(
                denom = %self.gas_price.denom,
                price = %self.gas_price.amount,
                "Gas price is not positive, reporting 0 gas"
            );
            return "0".to_string();
        }

        let fee = parse_or_zero(fee);
        let one = BigDecimal::from(1);

        // Division is rounded to a finite precision, so settle the floor
        // exactly with multiplication.
        let mut gas = (&fee / &self.price).with_scale_round(0, RoundingMode::Floor);
        while &gas * &self.price > fee {
            gas = &gas - &one;
        }
        while (&gas + &one) * &self.price <= fee {
            gas = &gas + &one;
        }

        integer_string(&gas)
    }
}

/// Memoized [`FeeCalculator`] factory
///
/// Hands out the same `Arc<FeeCalculator>` for as long as the denom and its
/// published price stay the same, so reactive consumers only recompute when
/// the price actually moves.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use terra_display::{FeeCalculatorCache, GasPrices};
///
/// let mut cache = FeeCalculatorCache::new();
/// assert!(cache.get(None, "uluna").is_none());
///
/// let prices = GasPrices::new([("uluna", "0.015")]);
/// let a = cache.get(Some(&prices), "uluna").unwrap();
/// let b = cache.get(Some(&prices), "uluna").unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct FeeCalculatorCache {
    memo: Memo<GasPrice, FeeCalculator>,
}

impl FeeCalculatorCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator for `denom` at the current prices, `None` while unloaded
    pub fn get(&mut self, prices: Option<&GasPrices>, denom: &str) -> Option<Arc<FeeCalculator>> {
        let prices = prices?;
        let key = GasPrice::new(prices.get(denom).unwrap_or("0"), denom);

        Some(self.memo.get_or_compute(key, |gas_price| {
            let _guard = spans::build_fee_calculator(&gas_price.denom, &gas_price.amount).entered();
            tracing::debug!("Gas price changed, rebuilding fee calculator");
            FeeCalculator::new(gas_price.clone())
        }))
    }

    /// The most recently built calculator, if any
    pub fn current(&self) -> Option<Arc<FeeCalculator>> {
        self.memo.current()
    }
}
