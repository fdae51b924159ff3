//! Error types for date formatting.

/// Errors that can occur while formatting a date.
///
/// Empty input is not an error (it formats as an empty string); only
/// non-empty input that isn't a recognisable ISO-8601 timestamp is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateFormatError {
    /// The input string is not an ISO-8601 date or date-time.
    #[error("Invalid ISO-8601 date: {input:?}")]
    InvalidIso {
        /// The rejected input
        input: String,
    },

    /// The local date-time does not exist in the target zone (e.g. it falls
    /// inside a daylight-saving gap).
    #[error("Date-time {input:?} does not exist in the target time zone")]
    NonexistentLocalTime {
        /// The rejected input
        input: String,
    },
}

impl DateFormatError {
    /// Create an `InvalidIso` error for the given input.
    pub fn invalid_iso(input: impl Into<String>) -> Self {
        Self::InvalidIso {
            input: input.into(),
        }
    }
}
