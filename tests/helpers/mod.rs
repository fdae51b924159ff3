// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for terra-display integration tests
//!
//! Provides a mock explorer API so transaction helpers can be exercised
//! without a live node.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use terra_display::tx::{AccountResponse, ExplorerApi, LatestBlock};
use terra_display::{ApiError, GasPrices};

/// Mock ExplorerApi backed by canned JSON bodies
///
/// # Example
///
/// ```rust,ignore
/// let api = MockExplorerApi::new("columbus-5")
///     .with_account(r#"{"result":{"value":{"account_number":"1","sequence":"2"}}}"#)
///     .with_gas_prices([("uluna", "0.015")]);
///
/// let base = get_base(&api, "terra1...").await?;
/// ```
pub struct MockExplorerApi {
    latest_block: String,
    account: String,
    gas_prices: GasPrices,
    fail_account: bool,
    account_calls: AtomicUsize,
    price_calls: AtomicUsize,
}

impl MockExplorerApi {
    /// Mock whose latest block reports `chain_id` and whose account is new
    pub fn new(chain_id: &str) -> Self {
        Self {
            latest_block: serde_json::json!({
                "block": { "header": { "chain_id": chain_id, "height": "1" } }
            })
            .to_string(),
            account: r#"{"result":{"value":{}}}"#.to_string(),
            gas_prices: GasPrices::default(),
            fail_account: false,
            account_calls: AtomicUsize::new(0),
            price_calls: AtomicUsize::new(0),
        }
    }

    /// Body returned for the account endpoint
    pub fn with_account(mut self, body: &str) -> Self {
        self.account = body.to_string();
        self
    }

    /// Gas price table returned by the price endpoint
    pub fn with_gas_prices<const N: usize>(mut self, prices: [(&str, &str); N]) -> Self {
        self.gas_prices = GasPrices::new(prices);
        self
    }

    /// Make the account endpoint fail with a transport error
    pub fn failing_account(mut self) -> Self {
        self.fail_account = true;
        self
    }

    pub fn account_calls(&self) -> usize {
        self.account_calls.load(Ordering::SeqCst)
    }

    pub fn price_calls(&self) -> usize {
        self.price_calls.load(Ordering::SeqCst)
    }
}

fn decode<T: serde::de::DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::unexpected_payload(endpoint, e.to_string()))
}

#[async_trait]
impl ExplorerApi for MockExplorerApi {
    async fn latest_block(&self) -> Result<LatestBlock, ApiError> {
        decode("/blocks/latest", &self.latest_block)
    }

    async fn account(&self, address: &str) -> Result<AccountResponse, ApiError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);
        let endpoint = terra_display::tx::account_path(address);
        if self.fail_account {
            return Err(ApiError::request_failed(endpoint, "connection reset"));
        }
        decode(&endpoint, &self.account)
    }

    async fn gas_prices(&self) -> Result<GasPrices, ApiError> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.gas_prices.clone())
    }
}

/// Install a test subscriber so `tracing` output shows with `--nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
