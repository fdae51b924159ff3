//! Error types for the explorer API collaborator.
//!
//! The crate never performs HTTP itself. Implementations of
//! [`ExplorerApi`](crate::tx::ExplorerApi) report their transport failures
//! through [`ApiError::RequestFailed`], keeping the original error as the
//! source.

/// Errors reported while talking to the explorer API.
///
/// # Examples
///
/// ```rust
/// use terra_display::ApiError;
///
/// let error = ApiError::unexpected_payload("/blocks/latest", "missing chain_id");
/// assert_eq!(
///     error.to_string(),
///     "Unexpected payload from /blocks/latest: missing chain_id"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be completed.
    #[error("Request to {endpoint} failed")]
    RequestFailed {
        /// Endpoint path that was requested
        endpoint: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The endpoint answered with a body we could not use.
    #[error("Unexpected payload from {endpoint}: {details}")]
    UnexpectedPayload {
        /// Endpoint path that was requested
        endpoint: String,
        /// What was wrong with the payload
        details: String,
    },
}

impl ApiError {
    /// Create a `RequestFailed` error wrapping a transport error.
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::RequestFailed {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    /// Create an `UnexpectedPayload` error with details.
    pub fn unexpected_payload(endpoint: impl Into<String>, details: impl Into<String>) -> Self {
        Self::UnexpectedPayload {
            endpoint: endpoint.into(),
            details: details.into(),
        }
    }
}
