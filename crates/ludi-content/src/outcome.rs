//! Structured fetch results and the observer hook.
//!
//! Callers of the public list/lookup operations only ever see a list or an
//! `Option`. The distinction between "nothing there" and "fetch failed" is
//! kept here, reported to a [`FetchObserver`], and available through the
//! `*_outcome` methods.

use std::fmt;

use crate::error::ContentError;

/// Resource kinds served by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Games,
    Game,
    Facilitators,
    Schedule,
    Testimonials,
}

impl Resource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Game => "game",
            Self::Facilitators => "facilitators",
            Self::Schedule => "schedule",
            Self::Testimonials => "testimonials",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one fetch, before it is collapsed for page assembly.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// At least one entity was produced.
    Loaded(T),
    /// The request succeeded but yielded nothing (or nothing usable).
    Empty,
    /// Transport, status, or body failure.
    Failed(ContentError),
}

impl<T> FetchOutcome<T> {
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Collapse into the value page assembly consumes.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Empty | Self::Failed(_) => None,
        }
    }

    /// The failure cause, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ContentError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> FetchOutcome<Vec<T>> {
    /// Wrap a normalized collection, mapping an empty list to [`Self::Empty`].
    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(items)
        }
    }

    /// Collapse into a (possibly empty) list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.into_option().unwrap_or_default()
    }
}

/// What an observer is told about a finished fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeSummary {
    Loaded { count: usize, dropped: usize },
    Empty { dropped: usize },
    Failed { reason: String },
}

/// Hook invoked once per fetch with its structured result.
pub trait FetchObserver: Send + Sync {
    fn record(&self, resource: Resource, summary: &OutcomeSummary);
}

/// Default observer: reports outcomes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn record(&self, resource: Resource, summary: &OutcomeSummary) {
        match summary {
            OutcomeSummary::Loaded { count, dropped } => {
                tracing::debug!(%resource, count, dropped, "content fetched");
            }
            OutcomeSummary::Empty { dropped } => {
                tracing::info!(%resource, dropped, "content fetch returned nothing");
            }
            OutcomeSummary::Failed { reason } => {
                tracing::warn!(%resource, %reason, "content fetch failed");
            }
        }
    }
}
