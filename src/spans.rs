//! Span creation helpers for terra-display operations.
//!
//! Telemetry is kept out of the business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

/// Create span for rebuilding a fee calculator after a price change.
///
/// Parent: caller's span (usually a UI refresh)
/// Children: None
#[inline]
pub(crate) fn build_fee_calculator(denom: &str, price: &str) -> Span {
    tracing::debug_span!(
        "terra_display.build_fee_calculator",
        denom = denom,
        price = price,
    )
}

/// Create span for assembling a transaction base for an account.
///
/// This is the main entry point before signing a transaction.
///
/// Parent: None (root span for this operation)
/// Children: latest block and account requests
#[inline]
pub(crate) fn get_base(from: &str) -> Span {
    tracing::info_span!("terra_display.get_base", from = from)
}

/// Create span for fetching gas prices and building a fee calculator.
///
/// Parent: None (root span for this operation)
/// Children: gas price request
#[inline]
pub(crate) fn fetch_fee_calculator(denom: &str) -> Span {
    tracing::info_span!("terra_display.fetch_fee_calculator", denom = denom)
}

/// Create span for a chain switch on the live feed.
///
/// Parent: caller's span
/// Children: None
#[inline]
pub(crate) fn switch_chain(from: &str, to: &str) -> Span {
    tracing::debug_span!("terra_display.switch_chain", from = from, to = to)
}
