//! Status handling for content API responses.
//!
//! Every non-2xx status is a failure of the same kind: nothing here retries,
//! so 429 and 503 end up as [`ContentError::Api`] like a 500 does.

use serde_json::Value;

use crate::error::ContentError;

/// Longest error body kept verbatim in [`ContentError::Api`].
const MAX_ERROR_BODY: usize = 200;

/// Pass a successful response through, turn anything else into
/// [`ContentError::Api`].
pub async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ContentError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ContentError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Message from an error body.
///
/// The content API answers errors with
/// `{ "data": null, "error": { "status", "name", "message" } }`; other bodies
/// (proxy pages, plain text) are kept, cut to [`MAX_ERROR_BODY`] characters.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();
    if let Some(message) = parsed
        .as_ref()
        .and_then(|v| v.pointer("/error/message"))
        .and_then(Value::as_str)
    {
        return message.to_string();
    }
    body.trim().chars().take(MAX_ERROR_BODY).collect()
}
