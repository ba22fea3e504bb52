//! Content API connection settings.

use ludi_core::FacilitatorSource;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default content API address (local development backend).
fn default_base_url() -> String {
    String::from("http://localhost:1337")
}

fn default_user_agent() -> String {
    String::from("ludi/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentApiConfig {
    /// Base address of the content API, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request. Empty means anonymous access.
    #[serde(default)]
    pub api_token: String,

    /// Users endpoint variant used to list facilitators.
    #[serde(default)]
    pub facilitator_source: FacilitatorSource,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ContentApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: String::new(),
            facilitator_source: FacilitatorSource::default(),
            user_agent: default_user_agent(),
        }
    }
}

impl ContentApiConfig {
    /// Whether requests will carry a bearer token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.api_token.trim().is_empty()
    }

    /// Check that the base URL is an absolute http(s) address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `base_url` is empty or uses
    /// another scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "content.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "content.base_url".into(),
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        Ok(())
    }
}
