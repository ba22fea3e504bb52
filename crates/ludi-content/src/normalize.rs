//! Mapping raw records into [`ludi_core::entities`].
//!
//! Every entity kind implements [`FromRecord`]. Field-level problems never
//! fail a record: strings fall back to empty or placeholder values, numbers
//! to zero, relations to `None` or an empty list. Only a record with an
//! unrecognized shape or no id is rejected, and a batch drops such records
//! instead of failing.

use std::collections::HashSet;

use ludi_core::ContentId;
use ludi_core::entities::{Feature, Image};
use serde_json::Value;

use crate::error::NormalizeError;
use crate::record::{RawRecord, coerce_number, unwrap_relation};
use crate::rich_text::plain_text;

/// An entity that can be built from one raw record.
pub trait FromRecord: Sized {
    /// Label used in log fields.
    const KIND: &'static str;

    /// Build the entity from a detected record.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] when the record cannot yield a minimally
    /// valid entity.
    fn from_record(record: &RawRecord<'_>, normalizer: &Normalizer) -> Result<Self, NormalizeError>;

    fn content_id(&self) -> &ContentId;
}

/// Result of normalizing a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    pub items: Vec<T>,
    /// Records rejected or skipped as duplicates.
    pub dropped: usize,
}

/// Converts raw API records into entities.
#[derive(Debug, Clone)]
pub struct Normalizer {
    media_base: String,
}

impl Normalizer {
    /// `media_base` is prefixed to relative upload paths.
    #[must_use]
    pub fn new(media_base: impl Into<String>) -> Self {
        let media_base = media_base.into().trim_end_matches('/').to_string();
        Self { media_base }
    }

    /// Normalize one raw record.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError`] when the shape is unrecognized or the
    /// entity-specific minimum is not met.
    pub fn one<T: FromRecord>(&self, raw: &Value) -> Result<T, NormalizeError> {
        let record = RawRecord::detect(raw)?;
        T::from_record(&record, self)
    }

    /// Normalize a collection, dropping records that fail and later
    /// duplicates of an id already seen.
    #[must_use]
    pub fn batch<T: FromRecord>(&self, raw: &[Value]) -> Batch<T> {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(raw.len());
        let mut dropped = 0;

        for (index, value) in raw.iter().enumerate() {
            match self.one::<T>(value) {
                Ok(item) => {
                    if seen.insert(item.content_id().clone()) {
                        items.push(item);
                    } else {
                        dropped += 1;
                        tracing::warn!(
                            kind = T::KIND,
                            id = %item.content_id(),
                            "duplicate id in collection, keeping first"
                        );
                    }
                }
                Err(e) => {
                    dropped += 1;
                    tracing::warn!(kind = T::KIND, index, %e, "dropping record");
                }
            }
        }

        Batch { items, dropped }
    }

    /// Resolve a media path against the content API address.
    #[must_use]
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{path}", self.media_base)
        } else {
            format!("{}/{path}", self.media_base)
        }
    }

    /// Normalize an image relation.
    ///
    /// Accepts a flat media object, an `{ id, attributes }` record, or either
    /// inside a `data` wrapper. A list yields its first image. Returns `None`
    /// when no usable `url` is present.
    #[must_use]
    pub fn image(&self, value: Option<&Value>, fallback_alt: &str) -> Option<Image> {
        let value = value.and_then(unwrap_relation)?;
        if let Value::Array(items) = value {
            return items.iter().find_map(|item| self.image(Some(item), fallback_alt));
        }
        let record = RawRecord::detect(value).ok()?;
        let url = record.non_empty(&["url"])?;
        Some(Image {
            url: self.media_url(url),
            width: dimension(record.number(&["width"])).unwrap_or(Image::DEFAULT_WIDTH),
            height: dimension(record.number(&["height"])).unwrap_or(Image::DEFAULT_HEIGHT),
            alternative_text: record
                .non_empty(&["alternativeText"])
                .unwrap_or(fallback_alt)
                .to_string(),
        })
    }

    /// Normalize a to-many image relation, skipping unusable entries.
    #[must_use]
    pub fn images(&self, items: &[Value], fallback_alt: &str) -> Vec<Image> {
        items
            .iter()
            .filter_map(|item| self.image(Some(item), fallback_alt))
            .collect()
    }
}

/// Normalize one feature entry; non-object entries become blank features.
#[must_use]
pub fn feature(value: &Value) -> Feature {
    let Ok(record) = RawRecord::detect(value) else {
        return Feature::default();
    };
    Feature {
        title: record.string(&["title"]).unwrap_or_default().to_string(),
        description: record.first(&["description"]).map(plain_text).unwrap_or_default(),
    }
}

/// Require an id on `record`.
///
/// # Errors
///
/// Returns [`NormalizeError::MissingId`] when the record has none.
pub fn require_id(record: &RawRecord<'_>) -> Result<ContentId, NormalizeError> {
    record.id().ok_or(NormalizeError::MissingId)
}

/// Rich-text field as plain text, empty when absent.
#[must_use]
pub fn text_field(record: &RawRecord<'_>, keys: &[&str]) -> String {
    record.first(keys).map(plain_text).unwrap_or_default()
}

/// Plain string field, empty when absent or not a string.
#[must_use]
pub fn string_field(record: &RawRecord<'_>, keys: &[&str]) -> String {
    record.string(keys).unwrap_or_default().to_string()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn dimension(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| *v >= 1.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.round() as u32)
}

/// Coerce a raw price: absent, non-numeric, or negative values become 0.
#[must_use]
pub fn price(value: Option<&Value>) -> f64 {
    match value.and_then(coerce_number) {
        Some(p) if p >= 0.0 => p,
        Some(p) => {
            tracing::debug!(price = p, "negative price coerced to 0");
            0.0
        }
        None => 0.0,
    }
}

/// Coerce a raw discount percentage, keeping only values in `[0, 100]`.
#[must_use]
pub fn discount(value: Option<&Value>) -> Option<f64> {
    let pct = value.and_then(coerce_number)?;
    if (0.0..=100.0).contains(&pct) {
        Some(pct)
    } else {
        tracing::warn!(discount = pct, "discount outside 0..=100 ignored");
        None
    }
}
