// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction helpers
//!
//! - [`get_base`] assembles the chain id, account number and sequence a new
//!   transaction starts from.
//! - [`fetch_fee_calculator`] loads the gas price table and builds a
//!   [`FeeCalculator`](crate::FeeCalculator) for one denom.
//! - [`parse_error`], [`check_error`] and [`get_message`] turn a rejected
//!   post or a raw log into a single readable message.
//! - [`stringify`] serializes an object without its falsy fields.
//!
//! All API access goes through the [`ExplorerApi`] trait; the crate never
//! performs requests itself.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use terra_display::tx::{
//!     get_base, AccountResponse, ExplorerApi, LatestBlock,
//! };
//! use terra_display::{ApiError, GasPrices};
//!
//! struct Fixed;
//!
//! #[async_trait]
//! impl ExplorerApi for Fixed {
//!     async fn latest_block(&self) -> Result<LatestBlock, ApiError> {
//!         Ok(serde_json::from_str(r#"{"block":{"header":{"chain_id":"columbus-5"}}}"#).unwrap())
//!     }
//!
//!     async fn account(&self, _address: &str) -> Result<AccountResponse, ApiError> {
//!         Ok(serde_json::from_str(
//!             r#"{"result":{"value":{"account_number":"1","sequence":"2"}}}"#,
//!         )
//!         .unwrap())
//!     }
//!
//!     async fn gas_prices(&self) -> Result<GasPrices, ApiError> {
//!         Ok(GasPrices::new([("uluna", "0.015")]))
//!     }
//! }
//!
//! # tokio_test_block_on(async {
//! let base = get_base(&Fixed, "terra1abc").await.unwrap();
//! assert_eq!(base.chain_id, "columbus-5");
//! assert_eq!(base.sequence, "2");
//! # });
//! # fn tokio_test_block_on(f: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod base;
mod messages;

pub use base::{
    account_path, fetch_fee_calculator, get_base, AccountResponse, AccountResult, AccountValue,
    BaseAccount, Block, BlockHeader, ExplorerApi, LatestBlock, TxBase, VestingAccount,
    GAS_PRICES_PATH, LATEST_BLOCK_PATH,
};
pub use messages::{check_error, get_message, parse_error, stringify, RawLogEntry};
