// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Gas price types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Price of one gas unit in a given denom
///
/// `amount` is a decimal string (`"0.015"`), as published by the gas price
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GasPrice {
    /// Decimal price per gas unit
    pub amount: String,
    /// Denom the fee is paid in
    pub denom: String,
}

impl GasPrice {
    /// Create a gas price
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            denom: denom.into(),
        }
    }
}

/// Gas price table keyed by denom, as returned by `/v1/txs/gas_prices`
///
/// # Examples
///
/// ```
/// use terra_display::GasPrices;
///
/// let prices: GasPrices = serde_json::from_str(r#"{"uluna":"0.015","ukrw":"178.05"}"#).unwrap();
/// assert_eq!(prices.get("uluna"), Some("0.015"));
/// assert_eq!(prices.get("uusd"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasPrices(HashMap<String, String>);

impl GasPrices {
    /// Create a price table from `(denom, price)` pairs
    pub fn new<I, D, P>(prices: I) -> Self
    where
        I: IntoIterator<Item = (D, P)>,
        D: Into<String>,
        P: Into<String>,
    {
        Self(
            prices
                .into_iter()
                .map(|(denom, price)| (denom.into(), price.into()))
                .collect(),
        )
    }

    /// Price for a denom, if published
    pub fn get(&self, denom: &str) -> Option<&str> {
        self.0.get(denom).map(String::as_str)
    }

    /// Number of denoms with a published price
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no price is published
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<D: Into<String>, P: Into<String>> FromIterator<(D, P)> for GasPrices {
    fn from_iter<I: IntoIterator<Item = (D, P)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_prices_lookup() {
        let prices = GasPrices::new([("uluna", "0.015"), ("ukrw", "178.05")]);
        assert_eq!(prices.len(), 2);
        assert_eq!(prices.get("ukrw"), Some("178.05"));
        assert_eq!(prices.get("umnt"), None);
    }

    #[test]
    fn test_gas_prices_serialization() {
        let prices: GasPrices = [("uluna", "0.015")].into_iter().collect();
        let json = serde_json::to_string(&prices).unwrap();
        assert_eq!(json, r#"{"uluna":"0.015"}"#);
        let back: GasPrices = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prices);
    }

    #[test]
    fn test_empty_table() {
        assert!(GasPrices::default().is_empty());
    }
}
