//! Well-known denominations and constants
//!
//! Fixed data the formatting helpers rely on.

/// Prefix marking a micro-denominated unit code (`uluna`, `ukrw`, ...)
pub const MICRO_PREFIX: char = 'u';

/// Number of decimal places between base units and display units
///
/// One display unit is `10^MICRO_DECIMALS` base units.
pub const MICRO_DECIMALS: u32 = 6;

/// Display label used for the native staking denom
pub const LUNA_LABEL: &str = "Luna";

/// Finder chain segment used when no chain is configured
pub const DEFAULT_CHAIN: &str = "mainnet";

/// Chart durations (in days) offered when a chart doesn't configure its own
///
/// `0` means "from genesis".
pub const DEFAULT_CHART_DURATIONS: [u32; 4] = [0, 7, 14, 30];

/// Fiat currency codes with a Terra stablecoin
///
/// A denom whose unit is listed here is displayed as its first two letters
/// followed by `T` (`ukrw` → `KRT`, `uusd` → `UST`, `usdr` → `SDT`).
pub const CURRENCIES: &[&str] = &[
    "AUD", "CAD", "CHF", "CNY", "DKK", "EUR", "GBP", "HKD", "IDR", "INR", "JPY", "KRW", "MNT",
    "NOK", "PHP", "SDR", "SEK", "SGD", "THB", "USD",
];
