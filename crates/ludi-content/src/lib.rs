//! # ludi-content
//!
//! Content API client for the LudiTools site.
//!
//! Fetches the collections the site renders and normalizes them into the
//! stable types of `ludi-core`:
//! - games (store catalog and single-item lookup)
//! - facilitators (user accounts tagged as facilitators)
//! - schedule entries (camp programme)
//! - testimonials
//!
//! The API has served two record layouts (flat fields vs. fields under
//! `attributes`); [`record`] detects which one each record uses and
//! [`normalize`] maps both to the same entity.
//!
//! Public operations never fail. Transport errors, error statuses, malformed
//! bodies and unusable records all collapse to an empty list or `None`.
//! The structured [`FetchOutcome`] behind each call is reported to a
//! [`FetchObserver`] and is available through the `*_outcome` methods.

pub mod facilitators;
pub mod games;
pub mod landing;
pub mod normalize;
pub mod record;
pub mod rich_text;
pub mod schedule;
pub mod testimonials;

mod error;
mod http;
mod outcome;

pub use error::{ContentError, NormalizeError};
pub use landing::LandingContent;
pub use normalize::{Batch, FromRecord, Normalizer};
pub use outcome::{FetchObserver, FetchOutcome, OutcomeSummary, Resource, TracingObserver};

use std::sync::Arc;

use ludi_core::FacilitatorSource;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::http::ensure_success;
use crate::record::{Envelope, RawRecord};

// ── Configuration ──────────────────────────────────────────────────

/// Explicit settings for a [`ContentClient`].
#[derive(Debug, Clone)]
pub struct ContentClientConfig {
    /// Base address of the content API, e.g. `https://cms.example.com`.
    pub base_url: String,
    /// Bearer token; `None` or blank for anonymous access.
    pub api_token: Option<String>,
    /// Users endpoint variant used to list facilitators.
    pub facilitator_source: FacilitatorSource,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Honour `HTTP_PROXY`-style environment variables.
    pub use_system_proxy: bool,
}

impl Default for ContentClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:1337"),
            api_token: None,
            facilitator_source: FacilitatorSource::default(),
            user_agent: String::from("ludi/0.1"),
            use_system_proxy: true,
        }
    }
}

impl ContentClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the content API.
///
/// Holds no mutable state: concurrent fetches share only the connection pool.
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    facilitator_source: FacilitatorSource,
    normalizer: Normalizer,
    observer: Arc<dyn FetchObserver>,
}

impl ContentClient {
    /// Build a client from explicit settings.
    ///
    /// No timeout or retry policy is configured beyond the transport defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidConfig`] if the base URL is not an
    /// http(s) address or the token cannot be sent as a header, and
    /// [`ContentError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: ContentClientConfig) -> Result<Self, ContentError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ContentError::InvalidConfig(format!(
                "base URL must be http(s), got '{base_url}'"
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = config.api_token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ContentError::InvalidConfig(format!("API token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            normalizer: Normalizer::new(base_url.clone()),
            base_url,
            facilitator_source: config.facilitator_source,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replace the default [`TracingObserver`].
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// GET `path` and return the raw records inside the response envelope.
    async fn fetch_items(&self, path: &str) -> Result<Vec<Value>, ContentError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "content request");

        let resp = ensure_success(self.http.get(&url).send().await?).await?;
        let bytes = resp.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ContentError::MalformedBody(e.to_string()))?;
        let items = Envelope::from_body(body)?.into_items();
        tracing::debug!(%url, records = items.len(), "content response");
        Ok(items)
    }

    /// Fetch and normalize a collection.
    ///
    /// Records rejected by `keep` are skipped before normalization and are
    /// not counted as dropped. Records of an unrecognized shape always reach
    /// the normalizer so they are reported.
    async fn list_outcome<T, F>(&self, resource: Resource, path: &str, keep: F) -> FetchOutcome<Vec<T>>
    where
        T: FromRecord,
        F: Fn(&RawRecord<'_>) -> bool,
    {
        let raw = match self.fetch_items(path).await {
            Ok(raw) => raw,
            Err(e) => return self.fail(resource, e),
        };

        let total = raw.len();
        let raw: Vec<Value> = raw
            .into_iter()
            .filter(|value| RawRecord::detect(value).map_or(true, |record| keep(&record)))
            .collect();
        if raw.len() < total {
            tracing::debug!(%resource, skipped = total - raw.len(), "records filtered out");
        }

        let Batch { items, dropped } = self.normalizer.batch::<T>(&raw);
        let summary = if items.is_empty() {
            OutcomeSummary::Empty { dropped }
        } else {
            OutcomeSummary::Loaded {
                count: items.len(),
                dropped,
            }
        };
        self.observer.record(resource, &summary);
        FetchOutcome::from_items(items)
    }

    fn fail<T>(&self, resource: Resource, error: ContentError) -> FetchOutcome<T> {
        self.observer.record(
            resource,
            &OutcomeSummary::Failed {
                reason: error.to_string(),
            },
        );
        FetchOutcome::Failed(error)
    }
}
