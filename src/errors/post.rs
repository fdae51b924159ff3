//! Error types for broadcasting a transaction.

use serde::{Deserialize, Serialize};

use super::ApiError;

/// Body returned by the node when it rejects a transaction.
///
/// Nodes report failures either as a plain `message` or through `error`,
/// which holds a raw log: a JSON string, a parsed log array or an object
/// with a `message` of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human readable failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Raw log or parsed log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

/// Failure while posting a transaction.
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    /// The node answered and refused the transaction.
    #[error("Transaction rejected")]
    Rejected(ApiErrorBody),

    /// No usable answer from the node.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl PostError {
    /// Create a `Rejected` error from a response body.
    pub fn rejected(body: ApiErrorBody) -> Self {
        Self::Rejected(body)
    }
}
