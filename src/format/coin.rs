//! Coin display composition

use crate::format::decimal::{amount, AmountConfig};
use crate::format::denom::CurrencySet;
use crate::types::{Coin, DisplayCoin};

/// Format a coin's amount and denom label.
///
/// # Examples
///
/// ```
/// use terra_display::{display, AmountConfig, Coin};
///
/// let shown = display(&Coin::new("2500000", "ukrw"), AmountConfig::default());
/// assert_eq!(shown.value, "2.500000");
/// assert_eq!(shown.unit, "KRT");
/// ```
pub fn display(coin: &Coin, config: AmountConfig) -> DisplayCoin {
    display_with(coin, config, CurrencySet::global())
}

/// [`display`] against a caller-supplied currency set.
pub fn display_with(coin: &Coin, config: AmountConfig, currencies: &CurrencySet) -> DisplayCoin {
    DisplayCoin {
        value: amount(&coin.amount, config),
        unit: currencies.label(&coin.denom),
    }
}

/// Format a coin as `"{value} {unit}"`.
///
/// # Examples
///
/// ```
/// use terra_display::{coin, AmountConfig, Coin};
///
/// assert_eq!(coin(&Coin::new("1000000", "uluna"), AmountConfig::INTEGER), "1 Luna");
/// ```
pub fn coin(coin: &Coin, config: AmountConfig) -> String {
    display(coin, config).to_string()
}
