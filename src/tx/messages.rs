// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Human readable messages from transaction failures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::PostError;

/// One entry of a parsed raw log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLogEntry {
    #[serde(default)]
    pub msg_index: Option<u64>,
    #[serde(default)]
    pub success: bool,
    /// JSON text carrying a `message`
    #[serde(default)]
    pub log: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ParsedLog {
    #[serde(default)]
    message: Option<String>,
}

/// Message from a raw log string
///
/// Raw logs that are not JSON are already readable and come back unchanged.
///
/// # Examples
///
/// ```
/// use terra_display::tx::check_error;
///
/// let raw = r#"[{"success":false,"log":"{\"code\":5,\"message\":\"insufficient funds\"}"}]"#;
/// assert_eq!(check_error(Some(raw)), "insufficient funds");
/// assert_eq!(check_error(Some("out of gas")), "out of gas");
/// assert_eq!(check_error(None), "");
/// ```
pub fn check_error(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return String::new();
    };

    serde_json::from_str::<Value>(raw)
        .and_then(|parsed| get_message(&parsed))
        .unwrap_or_else(|_| raw.to_string())
}

/// Message from a parsed raw log
///
/// For a log array this is the message of the first failed entry; for an
/// object its own `message`. Anything else, or a missing message, yields
/// `""`. Fails only when the failed entry's `log` is not JSON.
pub fn get_message(parsed: &Value) -> Result<String, serde_json::Error> {
    match parsed {
        Value::Array(entries) => {
            let failed = entries
                .iter()
                .filter_map(|entry| RawLogEntry::deserialize(entry).ok())
                .find(|entry| !entry.success);

            let log = match failed.and_then(|entry| entry.log) {
                Some(log) if !log.is_empty() => serde_json::from_str::<ParsedLog>(&log)?,
                _ => ParsedLog::default(),
            };
            Ok(log.message.unwrap_or_default())
        }
        Value::Object(object) => Ok(object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()),
        _ => Ok(String::new()),
    }
}

/// Message to show for a failed post, or `default_message` when none can be
/// extracted
///
/// # Examples
///
/// ```
/// use terra_display::tx::parse_error;
/// use terra_display::{ApiError, ApiErrorBody, PostError};
///
/// let body = ApiErrorBody { message: Some("account sequence mismatch".into()), error: None };
/// assert_eq!(parse_error(&PostError::rejected(body), "Failed"), "account sequence mismatch");
///
/// let offline = PostError::from(ApiError::request_failed("/txs", "connection refused"));
/// assert_eq!(parse_error(&offline, "Failed"), "Failed");
/// ```
pub fn parse_error(error: &PostError, default_message: &str) -> String {
    let body = match error {
        PostError::Rejected(body) => body,
        PostError::Api(source) => {
            tracing::error!(error = %source, "Transaction post failed");
            return default_message.to_string();
        }
    };

    if let Some(message) = &body.message {
        return message.clone();
    }

    match &body.error {
        Some(Value::String(raw)) => check_error(Some(raw.as_str())),
        Some(parsed) => get_message(parsed).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Unreadable raw log in rejection");
            default_message.to_string()
        }),
        None => {
            tracing::error!(?body, "Rejection without a message");
            default_message.to_string()
        }
    }
}

/// JSON for `value` with falsy top-level fields removed, or `None` when
/// nothing is left
///
/// Falsy means `null`, `false`, `0` and `""`. Values that do not serialize to
/// an object have no fields and yield `None`. Remaining fields keep their
/// serialization order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use terra_display::tx::stringify;
///
/// let memo = json!({ "memo": "hi", "fees": null, "gas": 0 });
/// assert_eq!(stringify(&memo).unwrap().as_deref(), Some(r#"{"memo":"hi"}"#));
/// assert_eq!(stringify(&json!({ "memo": "" })).unwrap(), None);
/// ```
pub fn stringify<T: Serialize + ?Sized>(value: &T) -> Result<Option<String>, serde_json::Error> {
    let Value::Object(object) = serde_json::to_value(value)? else {
        return Ok(None);
    };

    let compact: Map<String, Value> = object
        .into_iter()
        .filter(|(_, value)| !is_falsy(value))
        .collect();

    if compact.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(&compact).map(Some)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
