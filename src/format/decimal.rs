// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-point decimal formatting for micro-denominated amounts
//!
//! Every conversion here truncates toward zero: a displayed balance must never
//! be larger than the balance on chain. All arithmetic goes through
//! [`BigDecimal`]; only the `*_n` helpers hand out a lossy `f64`.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::config::constants::MICRO_DECIMALS;

/// Fractional digits used when no precision is requested
pub const DEFAULT_PRECISION: u32 = MICRO_DECIMALS;

/// Options for [`amount`] and [`amount_n`]
///
/// # Examples
///
/// ```
/// use terra_display::{amount, AmountConfig};
///
/// assert_eq!(amount("2500000", AmountConfig::default()), "2.500000");
/// assert_eq!(amount("2500000", AmountConfig::INTEGER), "2");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmountConfig {
    /// Drop the fractional part entirely
    pub integer: bool,
}

impl AmountConfig {
    /// Whole display units only
    pub const INTEGER: Self = Self { integer: true };

    /// Fractional digits this configuration renders
    pub const fn precision(&self) -> u32 {
        if self.integer {
            0
        } else {
            DEFAULT_PRECISION
        }
    }
}

/// Truncate `raw` to `precision` fractional digits and format it with
/// thousands separators, always showing exactly `precision` digits.
///
/// Empty or non-numeric input formats as zero.
///
/// # Examples
///
/// ```
/// use terra_display::decimal;
///
/// assert_eq!(decimal("1234567.891", 2), "1,234,567.89");
/// assert_eq!(decimal("0.9999999", 6), "0.999999");
/// assert_eq!(decimal("12", 3), "12.000");
/// assert_eq!(decimal("", 6), "0.000000");
/// ```
pub fn decimal(raw: &str, precision: u32) -> String {
    render(&parse_or_zero(raw), precision, Grouping::Thousands)
}

/// Numeric counterpart of [`decimal`].
///
/// The truncation is exact; the conversion to `f64` is not, so callers that
/// need every digit of a large amount must use the string form.
pub fn decimal_n(raw: &str, precision: u32) -> f64 {
    to_f64(&render(&parse_or_zero(raw), precision, Grouping::None))
}

/// Convert base units to display units and format them.
///
/// # Examples
///
/// ```
/// use terra_display::{amount, AmountConfig};
///
/// assert_eq!(amount("0", AmountConfig::default()), "0.000000");
/// assert_eq!(amount("", AmountConfig::default()), "0.000000");
/// assert_eq!(amount("1000000", AmountConfig::default()), "1.000000");
/// assert_eq!(amount("1999999", AmountConfig::INTEGER), "1");
/// ```
pub fn amount(raw: &str, config: AmountConfig) -> String {
    render(
        &from_base_units(parse_or_zero(raw)),
        config.precision(),
        Grouping::Thousands,
    )
}

/// Numeric counterpart of [`amount`].
pub fn amount_n(raw: &str, config: AmountConfig) -> f64 {
    to_f64(&render(
        &from_base_units(parse_or_zero(raw)),
        config.precision(),
        Grouping::None,
    ))
}

/// Convert a display-unit input (what a user types) to an integer amount in
/// base units, truncating anything below one base unit.
///
/// # Examples
///
/// ```
/// use terra_display::to_amount;
///
/// assert_eq!(to_amount("1.5"), "1500000");
/// assert_eq!(to_amount("0.0000019"), "1");
/// assert_eq!(to_amount(""), "0");
/// ```
pub fn to_amount(input: &str) -> String {
    if input.trim().is_empty() {
        return "0".to_string();
    }

    render(&to_base_units(parse_or_zero(input)), 0, Grouping::None)
}

/// Convert base units to a display-unit input value, truncated to six
/// fractional digits without trailing zeros.
///
/// # Examples
///
/// ```
/// use terra_display::to_input;
///
/// assert_eq!(to_input("1500000"), "1.5");
/// assert_eq!(to_input("1"), "0.000001");
/// assert_eq!(to_input("3000000"), "3");
/// assert_eq!(to_input(""), "0");
/// ```
pub fn to_input(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "0".to_string();
    }

    let plain = render(
        &from_base_units(parse_or_zero(raw)),
        DEFAULT_PRECISION,
        Grouping::None,
    );
    trim_fraction(&plain)
}

/// Parse a decimal string, falling back to zero for empty or malformed input.
pub(crate) fn parse_or_zero(raw: &str) -> BigDecimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BigDecimal::from(0);
    }

    BigDecimal::from_str(trimmed).unwrap_or_else(|e| {
        tracing::warn!(input = raw, error = %e, "Failed to parse decimal amount, using 0");
        BigDecimal::from(0)
    })
}

/// Render a value as a plain integer string, truncating toward zero.
pub(crate) fn integer_string(value: &BigDecimal) -> String {
    render(value, 0, Grouping::None)
}

fn from_base_units(value: BigDecimal) -> BigDecimal {
    shift_scale(value, i64::from(MICRO_DECIMALS))
}

fn to_base_units(value: BigDecimal) -> BigDecimal {
    shift_scale(value, -i64::from(MICRO_DECIMALS))
}

/// Divide by `10^places` (multiply for negative `places`) without rounding.
fn shift_scale(value: BigDecimal, places: i64) -> BigDecimal {
    let (digits, scale) = value.into_bigint_and_exponent();
    BigDecimal::new(digits, scale + places)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    None,
    Thousands,
}

fn render(value: &BigDecimal, precision: u32, grouping: Grouping) -> String {
    let (digits, _) = value
        .with_scale_round(i64::from(precision), RoundingMode::Down)
        .into_bigint_and_exponent();

    let digits = digits.to_string();
    let (negative, magnitude) = match digits.strip_prefix('-') {
        Some(magnitude) => (true, magnitude),
        None => (false, digits.as_str()),
    };

    let precision = precision as usize;
    let padded = format!("{magnitude:0>width$}", width = precision + 1);
    let (whole, fraction) = padded.split_at(padded.len() - precision);

    let mut out = String::with_capacity(padded.len() + padded.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    match grouping {
        Grouping::None => out.push_str(whole),
        Grouping::Thousands => out.push_str(&group_thousands(whole)),
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn trim_fraction(plain: &str) -> String {
    match plain.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => plain.to_string(),
    }
}

fn to_f64(plain: &str) -> f64 {
    plain.parse::<f64>().unwrap_or_else(|e| {
        tracing::warn!(value = plain, error = %e, "Failed to convert decimal to f64, using 0.0");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_pads_and_groups() {
        assert_eq!(decimal("1234567", 2), "1,234,567.00");
        assert_eq!(decimal("123", 0), "123");
        assert_eq!(decimal("1234", 0), "1,234");
        assert_eq!(decimal("999999.5", 0), "999,999");
    }

    #[test]
    fn test_decimal_truncates_never_rounds_up() {
        assert_eq!(decimal("1.239", 2), "1.23");
        assert_eq!(decimal("0.0000009", 6), "0.000000");
        assert_eq!(decimal("2.9999999", 6), "2.999999");
    }

    #[test]
    fn test_decimal_negative_truncates_toward_zero() {
        assert_eq!(decimal("-1.239", 2), "-1.23");
        assert_eq!(decimal("-1234.5", 1), "-1,234.5");
        assert_eq!(decimal("-0.001", 2), "0.00");
    }

    #[test]
    fn test_decimal_malformed_input_is_zero() {
        assert_eq!(decimal("abc", 2), "0.00");
        assert_eq!(decimal("1,000", 0), "0");
        assert_eq!(decimal("   ", 3), "0.000");
    }

    #[test]
    fn test_decimal_accepts_exponent_notation() {
        assert_eq!(decimal("1e6", 0), "1,000,000");
        assert_eq!(decimal("1.5e-3", 4), "0.0015");
    }

    #[test]
    fn test_decimal_keeps_digits_beyond_f64() {
        assert_eq!(
            decimal("123456789012345678901234567890.123456789", 6),
            "123,456,789,012,345,678,901,234,567,890.123456"
        );
    }

    #[test]
    fn test_decimal_n() {
        assert_eq!(decimal_n("1.239", 2), 1.23);
        assert_eq!(decimal_n("", 6), 0.0);
        assert_eq!(decimal_n("1234567.5", 0), 1_234_567.0);
    }

    #[test]
    fn test_amount_zero_and_empty() {
        assert_eq!(amount("0", AmountConfig::default()), "0.000000");
        assert_eq!(amount("", AmountConfig::default()), "0.000000");
        assert_eq!(amount("", AmountConfig::INTEGER), "0");
    }

    #[test]
    fn test_amount_divides_by_micro() {
        assert_eq!(amount("1000000", AmountConfig::default()), "1.000000");
        assert_eq!(amount("1000000", AmountConfig::INTEGER), "1");
        assert_eq!(amount("1", AmountConfig::default()), "0.000001");
        assert_eq!(
            amount("123456789000000", AmountConfig::default()),
            "123,456,789.000000"
        );
    }

    #[test]
    fn test_amount_fractional_base_units_truncate() {
        // Some endpoints return decimal base-unit amounts
        assert_eq!(amount("1.9", AmountConfig::default()), "0.000001");
    }

    #[test]
    fn test_amount_n() {
        assert_eq!(amount_n("2500000", AmountConfig::default()), 2.5);
        assert_eq!(amount_n("2500000", AmountConfig::INTEGER), 2.0);
        assert_eq!(amount_n("", AmountConfig::default()), 0.0);
    }

    #[test]
    fn test_to_amount() {
        assert_eq!(to_amount("1"), "1000000");
        assert_eq!(to_amount("1.5"), "1500000");
        assert_eq!(to_amount("0.1234567"), "123456");
        assert_eq!(to_amount(""), "0");
        assert_eq!(to_amount("nope"), "0");
    }

    #[test]
    fn test_to_input() {
        assert_eq!(to_input("1500000"), "1.5");
        assert_eq!(to_input("1000000"), "1");
        assert_eq!(to_input("123456"), "0.123456");
        assert_eq!(to_input("0"), "0");
        assert_eq!(to_input(""), "0");
    }

    #[test]
    fn test_to_input_to_amount_round_trip() {
        for input in ["0", "1", "1.5", "0.000001", "98765.4321"] {
            assert_eq!(to_input(&to_amount(input)), input);
        }
    }

    #[test]
    fn test_integer_string() {
        assert_eq!(integer_string(&BigDecimal::from(1500)), "1500");
        assert_eq!(integer_string(&parse_or_zero("-7.9")), "-7");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("12345678"), "12,345,678");
    }
}
