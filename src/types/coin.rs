// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Coin record types

use serde::{Deserialize, Serialize};

/// Raw coin as returned by the ledger API
///
/// `amount` is an integer in base units (micro-units, `10^-6` of the display
/// unit) kept as a string because balances can exceed any native integer.
/// An empty amount is treated as zero by every formatter.
///
/// # Examples
///
/// ```
/// use terra_display::Coin;
///
/// let coin: Coin = serde_json::from_str(r#"{"amount":"1500000","denom":"uluna"}"#).unwrap();
/// assert_eq!(coin, Coin::new("1500000", "uluna"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coin {
    /// Integer amount in base units
    #[serde(default)]
    pub amount: String,
    /// Unit code, empty or `u`-prefixed (`uluna`, `ukrw`)
    #[serde(default)]
    pub denom: String,
}

impl Coin {
    /// Create a coin from an amount and denom code
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            denom: denom.into(),
        }
    }
}

/// Coin formatted for display
///
/// Derived from a [`Coin`] on every call to [`display`](crate::display); it
/// carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCoin {
    /// Grouped decimal amount in display units (`"1,234.500000"`)
    pub value: String,
    /// Human label for the denom (`"Luna"`, `"KRT"`), empty if unknown
    pub unit: String,
}

impl std::fmt::Display for DisplayCoin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
