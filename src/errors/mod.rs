// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the terra-display library.
//!
//! Most of the crate is deliberately permissive: malformed amounts render as
//! zero, unknown denoms render as an empty label and a missing gas price makes
//! the fee calculator unavailable rather than failing. The few operations that
//! do surface failures use the module-specific errors below:
//!
//! - [`DateFormatError`] - an ISO-8601 input that could not be parsed
//! - [`ConfigError`] - explorer configuration loading and validation
//! - [`ApiError`] - failures reported by an [`ExplorerApi`](crate::tx::ExplorerApi)
//!   implementation
//! - [`PostError`] - a transaction the node refused, or could not be posted
//!
//! [`DisplayError`] wraps all of them for callers that don't need to tell
//! the sources apart.
//!
//! # Examples
//!
//! ```rust
//! use terra_display::{date, DateConfig, DisplayError};
//!
//! fn render(input: &str) -> Result<String, DisplayError> {
//!     Ok(date(input, DateConfig::SHORT)?)
//! }
//!
//! assert!(render("not a date").is_err());
//! assert_eq!(render("").unwrap(), "");
//! ```

mod api;
mod config;
mod date;
mod post;

pub use api::ApiError;
pub use config::ConfigError;
pub use date::DateFormatError;
pub use post::{ApiErrorBody, PostError};

/// Unified error type for all terra-display operations.
///
/// All module-specific error types convert into `DisplayError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// Error from date formatting.
    #[error("Date formatting error: {0}")]
    Date(#[from] DateFormatError),

    /// Error from configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the explorer API collaborator.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Error from posting a transaction.
    #[error("Post error: {0}")]
    Post(#[from] PostError),
}
