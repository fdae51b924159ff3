// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction base and live gas prices from the explorer API.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::Instrument;

use crate::errors::ApiError;
use crate::fee::FeeCalculator;
use crate::spans;
use crate::types::{GasPrice, GasPrices};

/// Path of the latest block endpoint
pub const LATEST_BLOCK_PATH: &str = "/blocks/latest";

/// Path of the gas price table endpoint
pub const GAS_PRICES_PATH: &str = "/v1/txs/gas_prices";

/// Path of the account endpoint for `address`
pub fn account_path(address: &str) -> String {
    format!("/auth/accounts/{address}")
}

/// Explorer API endpoints this crate reads
///
/// The crate does no I/O itself. Implementors perform the requests, with
/// whatever retry and timeout policy they need, and map transport failures
/// into [`ApiError::RequestFailed`].
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// `GET /blocks/latest`
    async fn latest_block(&self) -> Result<LatestBlock, ApiError>;

    /// `GET /auth/accounts/{address}`
    async fn account(&self, address: &str) -> Result<AccountResponse, ApiError>;

    /// `GET /v1/txs/gas_prices`
    async fn gas_prices(&self) -> Result<GasPrices, ApiError>;
}

/// Latest block response, reduced to what a transaction needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestBlock {
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub chain_id: String,
    #[serde(default)]
    pub height: Option<String>,
}

impl LatestBlock {
    /// Chain id from the block header
    pub fn chain_id(&self) -> &str {
        &self.block.header.chain_id
    }
}

/// Account numbers needed to sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    #[serde(deserialize_with = "string_or_number", default = "zero")]
    pub account_number: String,
    #[serde(deserialize_with = "string_or_number", default = "zero")]
    pub sequence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingAccount {
    #[serde(rename = "BaseAccount")]
    pub base_account: BaseAccount,
}

/// Account value: a plain account, or a vesting account wrapping one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountValue {
    Vesting {
        #[serde(rename = "BaseVestingAccount")]
        base_vesting_account: VestingAccount,
    },
    Base(BaseAccount),
}

impl AccountValue {
    /// The underlying base account
    pub fn base(&self) -> &BaseAccount {
        match self {
            AccountValue::Vesting {
                base_vesting_account,
            } => &base_vesting_account.base_account,
            AccountValue::Base(base) => base,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResult {
    pub value: AccountValue,
}

/// `/auth/accounts/{address}` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub result: AccountResult,
}

/// Fields every transaction for an account starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxBase {
    pub from: String,
    pub chain_id: String,
    pub account_number: String,
    pub sequence: String,
}

/// Assemble the transaction base for `from`: chain id from the latest block,
/// account number and sequence from the account
///
/// # Errors
///
/// Propagates any [`ApiError`] from `api`, and returns
/// [`ApiError::UnexpectedPayload`] when the latest block has no chain id.
pub async fn get_base<A>(api: &A, from: &str) -> Result<TxBase, ApiError>
where
    A: ExplorerApi + ?Sized,
{
    async {
        let latest = api.latest_block().await?;
        let chain_id = latest.chain_id();
        if chain_id.is_empty() {
            return Err(ApiError::unexpected_payload(
                LATEST_BLOCK_PATH,
                "empty chain_id in block header",
            ));
        }

        let account = api.account(from).await?;
        let base = account.result.value.base();
        tracing::debug!(
            chain_id,
            account_number = %base.account_number,
            sequence = %base.sequence,
            "Resolved transaction base"
        );

        Ok(TxBase {
            from: from.to_string(),
            chain_id: chain_id.to_string(),
            account_number: base.account_number.clone(),
            sequence: base.sequence.clone(),
        })
    }
    .instrument(spans::get_base(from))
    .await
}

/// Fetch the gas price table and build a calculator for `denom`
///
/// A table without `denom` gives a calculator at price zero, the same as
/// [`FeeCalculator::from_prices`].
pub async fn fetch_fee_calculator<A>(api: &A, denom: &str) -> Result<FeeCalculator, ApiError>
where
    A: ExplorerApi + ?Sized,
{
    async {
        let prices = api.gas_prices().await?;
        let amount = prices.get(denom).unwrap_or_else(|| {
            tracing::warn!(prices = prices.len(), "No gas price for denom, using 0");
            "0"
        });
        Ok(FeeCalculator::new(GasPrice::new(amount, denom)))
    }
    .instrument(spans::fetch_fee_calculator(denom))
    .await
}

fn zero() -> String {
    "0".to_string()
}

/// Accept `"5"` or `5`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_account() {
        let json = r#"{"result":{"value":{"address":"terra1x","account_number":"42","sequence":"7"}}}"#;
        let account: AccountResponse = serde_json::from_str(json).unwrap();
        let base = account.result.value.base();
        assert_eq!(base.account_number, "42");
        assert_eq!(base.sequence, "7");
    }

    #[test]
    fn test_vesting_account() {
        let json = r#"{"result":{"value":{"BaseVestingAccount":{"BaseAccount":{"account_number":9,"sequence":3}}}}}"#;
        let account: AccountResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(account.result.value, AccountValue::Vesting { .. }));
        assert_eq!(account.result.value.base().account_number, "9");
        assert_eq!(account.result.value.base().sequence, "3");
    }

    #[test]
    fn test_new_account_defaults_to_zero() {
        let json = r#"{"result":{"value":{"address":"terra1x"}}}"#;
        let account: AccountResponse = serde_json::from_str(json).unwrap();
        assert_eq!(account.result.value.base().account_number, "0");
        assert_eq!(account.result.value.base().sequence, "0");
    }

    #[test]
    fn test_latest_block_chain_id() {
        let json = r#"{"block":{"header":{"chain_id":"columbus-5","height":"100"}}}"#;
        let latest: LatestBlock = serde_json::from_str(json).unwrap();
        assert_eq!(latest.chain_id(), "columbus-5");
    }

    #[test]
    fn test_account_path() {
        assert_eq!(account_path("terra1abc"), "/auth/accounts/terra1abc");
    }
}
