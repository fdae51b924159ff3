// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Date formatting
//!
//! Three display modes:
//!
//! | mode        | example                               |
//! |-------------|---------------------------------------|
//! | `short`     | `Jan 5, 2024`                         |
//! | `to_locale` | `Jan 5, 2024, 3:04:05 PM (UTC)`       |
//! | default     | `2024.01.05 15:04:05 (UTC)`           |
//!
//! Month names are always English regardless of the runtime locale. The zone
//! suffix is the zone abbreviation when the zone has one (`KST`, `EST`),
//! otherwise `Local`.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::errors::DateFormatError;

const SHORT_FORMAT: &str = "%b %-d, %Y";
const LOCALE_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";
const DEFAULT_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Suffix used when the zone has no textual abbreviation
pub const LOCAL_ZONE_LABEL: &str = "Local";

/// Options for [`date`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateConfig {
    /// Medium date and time with seconds (`Jan 5, 2024, 3:04:05 PM`)
    pub to_locale: bool,
    /// Medium date only, no time and no zone suffix; wins over `to_locale`
    pub short: bool,
}

impl DateConfig {
    /// `short: true`
    pub const SHORT: Self = Self {
        to_locale: false,
        short: true,
    };

    /// `to_locale: true`
    pub const LOCALE: Self = Self {
        to_locale: true,
        short: false,
    };
}

/// A date to format: an ISO-8601 string or an instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// ISO-8601 text; empty text formats as `""`
    Iso(String),
    /// A point in time
    Instant(DateTime<Utc>),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Iso(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Iso(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Instant(value.with_timezone(&Utc))
    }
}

/// Format a date in the runtime's local time zone.
///
/// The zone is the IANA zone named by `TZ` or, when unset, the system zone.
/// When neither resolves to a named zone the local offset is used and the
/// suffix is `Local`.
///
/// ISO-8601 text is accepted in extended or basic format, with reduced
/// precision:
///
/// | input                          | read as                          |
/// |--------------------------------|----------------------------------|
/// | `2024-01-05T15:04:05.123Z`     | instant                          |
/// | `2024-01-05T15:04:05+09:00`    | instant                          |
/// | `2024-01-05T15:04+0900`        | instant                          |
/// | `20240105T150405Z`             | instant                          |
/// | `2024-01-05T15:04:05`          | wall-clock time in the zone      |
/// | `2024-01-05T15`                | `15:00:00` in the zone           |
/// | `2024-01-05`, `20240105`       | midnight in the zone             |
/// | `2024-01`                      | midnight on the 1st in the zone  |
/// | `2024`                         | midnight on Jan 1 in the zone    |
///
/// A comma may stand in for the fraction dot. Ordinal and week dates are
/// not accepted.
///
/// Returns `Ok("")` for empty input and [`DateFormatError::InvalidIso`] for
/// anything else.
///
/// # Examples
///
/// ```
/// use terra_display::{date, DateConfig};
///
/// assert!(date("2024-01-05T15:04:05Z", DateConfig::SHORT).is_ok());
/// assert_eq!(date("", DateConfig::default()).unwrap(), "");
/// assert!(date("yesterday", DateConfig::default()).is_err());
/// ```
pub fn date(input: impl Into<DateInput>, config: DateConfig) -> Result<String, DateFormatError> {
    match runtime_zone() {
        Some(tz) => date_in(input, config, &tz),
        None => date_in(input, config, &Local),
    }
}

/// IANA zone from `TZ`, else the system zone
fn runtime_zone() -> Option<chrono_tz::Tz> {
    if let Ok(name) = std::env::var("TZ") {
        let name = name.trim_start_matches(':');
        return name
            .parse::<chrono_tz::Tz>()
            .map_err(|error| {
                tracing::debug!(zone = name, %error, "TZ is not an IANA zone, using local offset");
            })
            .ok();
    }

    let name = iana_time_zone::get_timezone()
        .map_err(|error| {
            tracing::debug!(%error, "System time zone unavailable, using local offset");
        })
        .ok()?;
    name.parse::<chrono_tz::Tz>()
        .map_err(|error| {
            tracing::debug!(zone = %name, %error, "Unknown system time zone, using local offset");
        })
        .ok()
}

/// Format a date in the given time zone.
///
/// ISO text without an offset is read as wall-clock time in `tz`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use terra_display::{date_in, DateConfig};
///
/// let iso = "2024-01-05T15:04:05Z";
/// assert_eq!(date_in(iso, DateConfig::SHORT, &Utc).unwrap(), "Jan 5, 2024");
/// assert_eq!(date_in(iso, DateConfig::LOCALE, &Utc).unwrap(), "Jan 5, 2024, 3:04:05 PM (UTC)");
/// assert_eq!(date_in(iso, DateConfig::default(), &Utc).unwrap(), "2024.01.05 15:04:05 (UTC)");
/// ```
pub fn date_in<Tz>(
    input: impl Into<DateInput>,
    config: DateConfig,
    tz: &Tz,
) -> Result<String, DateFormatError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let dt = match input.into() {
        DateInput::Iso(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(String::new());
            }
            parse_iso(text, tz)?
        }
        DateInput::Instant(instant) => instant.with_timezone(tz),
    };

    if config.short {
        return Ok(dt.format(SHORT_FORMAT).to_string());
    }

    let pattern = if config.to_locale {
        LOCALE_FORMAT
    } else {
        DEFAULT_FORMAT
    };
    let zone = zone_abbreviation(&dt).unwrap_or_else(|| LOCAL_ZONE_LABEL.to_string());

    Ok(format!("{} ({zone})", dt.format(pattern)))
}

fn parse_iso<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<DateTime<Tz>, DateFormatError> {
    let invalid = || {
        tracing::debug!(input = text, "Rejected non ISO-8601 date");
        DateFormatError::invalid_iso(text)
    };

    let extended = to_extended(text).ok_or_else(invalid)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&extended) {
        return Ok(dt.with_timezone(tz));
    }

    let naive = if extended.contains('T') {
        NaiveDateTime::parse_from_str(&extended, "%Y-%m-%dT%H:%M:%S%.f").ok()
    } else {
        NaiveDate::parse_from_str(&extended, "%Y-%m-%d")
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
    }
    .ok_or_else(invalid)?;

    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DateFormatError::NonexistentLocalTime {
            input: text.to_string(),
        })
}

/// Rewrite an ISO-8601 date or date-time as `YYYY-MM-DD` or
/// `YYYY-MM-DDTHH:MM:SS[.f][Z|+HH:MM]`. Field ranges are left to the parser.
fn to_extended(text: &str) -> Option<String> {
    match text.split_once('T') {
        Some((day, time)) => Some(format!("{}T{}", extended_date(day)?, extended_time(time)?)),
        None => extended_date(text),
    }
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn extended_date(day: &str) -> Option<String> {
    let parts: Vec<&str> = day.split('-').collect();
    match parts.as_slice() {
        [year, month, dom] if year.len() == 4 && month.len() == 2 && dom.len() == 2 => {
            parts.iter().all(|p| all_digits(p)).then(|| day.to_string())
        }
        [year, month] if year.len() == 4 && month.len() == 2 => {
            parts.iter().all(|p| all_digits(p)).then(|| format!("{day}-01"))
        }
        [basic] if basic.len() == 8 && all_digits(basic) => Some(format!(
            "{}-{}-{}",
            &basic[..4],
            &basic[4..6],
            &basic[6..]
        )),
        [year] if year.len() == 4 && all_digits(year) => Some(format!("{year}-01-01")),
        _ => None,
    }
}

fn extended_time(time: &str) -> Option<String> {
    let (clock, offset) = if let Some(clock) = time.strip_suffix(['Z', 'z']) {
        (clock, Some("Z".to_string()))
    } else if let Some(at) = time.rfind(['+', '-']) {
        (&time[..at], Some(extended_offset(&time[at..])?))
    } else {
        (time, None)
    };

    let (clock, fraction) = match clock.split_once(['.', ',']) {
        Some((clock, fraction)) if all_digits(fraction) => (clock, format!(".{fraction}")),
        Some(_) => return None,
        None => (clock, String::new()),
    };

    let fields: Vec<&str> = if clock.contains(':') {
        clock.split(':').collect()
    } else if clock.len() % 2 == 0 && all_digits(clock) {
        (0..clock.len()).step_by(2).map(|i| &clock[i..i + 2]).collect()
    } else {
        return None;
    };
    if !fields.iter().all(|f| f.len() == 2 && all_digits(f)) {
        return None;
    }
    let clock = match fields.as_slice() {
        [h] => format!("{h}:00:00"),
        [h, m] => format!("{h}:{m}:00"),
        [h, m, s] => format!("{h}:{m}:{s}"),
        _ => return None,
    };
    if !fraction.is_empty() && fields.len() < 3 {
        return None;
    }

    Some(format!("{clock}{fraction}{}", offset.unwrap_or_default()))
}

/// `+09`, `+0900` or `+09:00` as `+09:00`
fn extended_offset(offset: &str) -> Option<String> {
    let (sign, rest) = offset.split_at(1);
    let digits = rest.replacen(':', "", 1);
    if !all_digits(&digits) {
        return None;
    }
    match digits.len() {
        2 => Some(format!("{sign}{digits}:00")),
        4 => Some(format!("{sign}{}:{}", &digits[..2], &digits[2..])),
        _ => None,
    }
}

/// Textual zone abbreviation (`UTC`), or `None` when the zone only has a
/// numeric offset.
fn zone_abbreviation<Tz>(dt: &DateTime<Tz>) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let name = dt.offset().to_string();
    (!name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())).then_some(name)
}
