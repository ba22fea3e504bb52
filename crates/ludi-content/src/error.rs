//! Content layer error types.

use thiserror::Error;

/// Errors that can occur while fetching content.
///
/// These never reach page assembly: the public list/lookup operations
/// collapse them into empty results. They are surfaced through
/// [`crate::FetchOutcome`] and the [`crate::FetchObserver`] hook.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Content API returned a non-success status code, including 429.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// `error.message` from the body, or the start of the raw body.
        message: String,
    },

    /// The response body was not JSON or had no recognizable envelope.
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// A single-record lookup returned a record that could not be normalized.
    #[error("normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    /// The client configuration is unusable.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

/// Why a raw record could not become an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The record is neither a flat object nor an `{ id, attributes }` wrapper.
    #[error("unrecognized record shape: {0}")]
    UnrecognizedShape(&'static str),

    /// The record carries no usable `id` or `documentId`.
    #[error("record has no id")]
    MissingId,
}
