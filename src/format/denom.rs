//! Denomination labels

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::constants::{CURRENCIES, LUNA_LABEL, MICRO_PREFIX};

static DEFAULT_CURRENCIES: LazyLock<CurrencySet> =
    LazyLock::new(|| CurrencySet::new(CURRENCIES.iter().copied()));

/// Set of fiat currency codes that fold into stablecoin tickers
///
/// Codes are stored upper-cased. The process-wide default set is built once
/// from [`CURRENCIES`](crate::config::constants::CURRENCIES); other sets come
/// from [`ExplorerConfig::currency_set`](crate::ExplorerConfig::currency_set).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencySet(HashSet<String>);

impl CurrencySet {
    /// Build a set from currency codes (case-insensitive)
    pub fn new<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        Self(codes.into_iter().map(str::to_uppercase).collect())
    }

    /// The built-in currency set
    pub fn global() -> &'static Self {
        &DEFAULT_CURRENCIES
    }

    /// Check whether an upper-cased unit is a recognised currency
    pub fn contains(&self, unit: &str) -> bool {
        self.0.contains(unit)
    }

    /// Display label for a denom code, resolved against this set
    ///
    /// See [`denom`] for the rules.
    pub fn label(&self, code: &str) -> String {
        let Some(rest) = code.strip_prefix(MICRO_PREFIX) else {
            return String::new();
        };

        let unit = rest.to_uppercase();
        if unit == "LUNA" {
            LUNA_LABEL.to_string()
        } else if self.contains(&unit) {
            let mut ticker: String = unit.chars().take(2).collect();
            ticker.push('T');
            ticker
        } else {
            unit
        }
    }
}

/// Display label for a denom code.
///
/// - empty or not `u`-prefixed: `""`
/// - `uluna`: `"Luna"`
/// - a recognised fiat code: first two letters + `T` (`ukrw` → `"KRT"`)
/// - anything else: the unit upper-cased (`uabc` → `"ABC"`)
///
/// # Examples
///
/// ```
/// use terra_display::denom;
///
/// assert_eq!(denom("uluna"), "Luna");
/// assert_eq!(denom("ukrw"), "KRT");
/// assert_eq!(denom("uusd"), "UST");
/// assert_eq!(denom("luna"), "");
/// assert_eq!(denom(""), "");
/// ```
pub fn denom(code: &str) -> String {
    CurrencySet::global().label(code)
}

/// [`denom`] against a caller-supplied currency set.
pub fn denom_with(code: &str, currencies: &CurrencySet) -> String {
    currencies.label(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_codes_are_empty() {
        assert_eq!(denom(""), "");
        assert_eq!(denom("luna"), "");
        assert_eq!(denom("Uluna"), "");
        assert_eq!(denom("krw"), "");
    }

    #[test]
    fn test_luna() {
        assert_eq!(denom("uluna"), "Luna");
        assert_eq!(denom("uLUNA"), "Luna");
    }

    #[test]
    fn test_currency_codes_fold_to_tickers() {
        assert_eq!(denom("ukrw"), "KRT");
        assert_eq!(denom("uusd"), "UST");
        assert_eq!(denom("usdr"), "SDT");
        assert_eq!(denom("umnt"), "MNT");
        assert_eq!(denom("ueur"), "EUT");
    }

    #[test]
    fn test_unknown_units_pass_through_upper_cased() {
        assert_eq!(denom("uabc"), "ABC");
        assert_eq!(denom("u"), "");
    }

    #[test]
    fn test_denom_with_custom_set() {
        let set = CurrencySet::new(["xau"]);
        assert!(set.contains("XAU"));
        assert_eq!(denom_with("uxau", &set), "XAT");
        assert_eq!(denom_with("ukrw", &set), "KRW");
        assert_eq!(denom_with("uluna", &set), "Luna");
    }

    #[test]
    fn test_empty_set_never_folds() {
        let set = CurrencySet::default();
        assert_eq!(set.label("uusd"), "USD");
    }
}
