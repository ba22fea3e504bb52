//! Raw response shapes.
//!
//! The content API has returned two record layouts over its lifetime:
//!
//! ```text
//! flat:    { "id": 7, "Name": "Quiz Master", "LogoImg": { "url": ... } }
//! nested:  { "id": 7, "attributes": { "title": "Quiz Master",
//!            "coverImage": { "data": { "id": 3, "attributes": { "url": ... } } } } }
//! ```
//!
//! [`RawRecord::detect`] decides which one a value is before any field is
//! read. Relations in the nested layout sit inside a `{ "data": ... }`
//! wrapper which [`unwrap_relation`] strips.

use ludi_core::ContentId;
use serde_json::{Map, Value};

use crate::error::{ContentError, NormalizeError};

/// Outer structure of a collection response.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{ "data": [...] }` or a bare array.
    Collection(Vec<Value>),
    /// `{ "data": {...} }`.
    Single(Value),
    /// `{ "data": null }`.
    Empty,
}

impl Envelope {
    /// Classify a decoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::MalformedBody`] when the body is neither a
    /// `data` wrapper nor a bare array.
    pub fn from_body(body: Value) -> Result<Self, ContentError> {
        match body {
            Value::Array(items) => Ok(Self::Collection(items)),
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => Ok(Self::Collection(items)),
                Some(Value::Null) => Ok(Self::Empty),
                Some(single @ Value::Object(_)) => Ok(Self::Single(single)),
                Some(other) => Err(ContentError::MalformedBody(format!(
                    "`data` is a {}",
                    json_kind(&other)
                ))),
                None => Err(ContentError::MalformedBody(
                    "object body without `data` member".into(),
                )),
            },
            other => Err(ContentError::MalformedBody(format!(
                "body is a {}",
                json_kind(&other)
            ))),
        }
    }

    /// Flatten into the list of raw records.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Collection(items) => items,
            Self::Single(item) => vec![item],
            Self::Empty => Vec::new(),
        }
    }
}

/// A single raw record in one of the two known layouts.
#[derive(Debug, Clone, Copy)]
pub enum RawRecord<'a> {
    Flat(&'a Map<String, Value>),
    Nested {
        outer: &'a Map<String, Value>,
        attributes: &'a Map<String, Value>,
    },
}

impl<'a> RawRecord<'a> {
    /// Detect the layout of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::UnrecognizedShape`] for anything that is not
    /// a JSON object.
    pub fn detect(value: &'a Value) -> Result<Self, NormalizeError> {
        let Value::Object(outer) = value else {
            return Err(NormalizeError::UnrecognizedShape(json_kind(value)));
        };
        match outer.get("attributes") {
            Some(Value::Object(attributes)) => Ok(Self::Nested { outer, attributes }),
            _ => Ok(Self::Flat(outer)),
        }
    }

    /// Source-assigned identifier: `id`, then `documentId`.
    #[must_use]
    pub fn id(&self) -> Option<ContentId> {
        let outer = match self {
            Self::Flat(map) | Self::Nested { outer: map, .. } => map,
        };
        outer
            .get("id")
            .and_then(ContentId::from_json)
            .or_else(|| self.document_id())
    }

    /// The `documentId`, on the record itself or under `attributes`.
    #[must_use]
    pub fn document_id(&self) -> Option<ContentId> {
        match self {
            Self::Flat(map) => map.get("documentId").and_then(ContentId::from_json),
            Self::Nested { outer, attributes } => outer
                .get("documentId")
                .or_else(|| attributes.get("documentId"))
                .and_then(ContentId::from_json),
        }
    }

    /// Whether either the `id` or the `documentId` equals `wanted`.
    #[must_use]
    pub fn has_id(&self, wanted: &ContentId) -> bool {
        self.id().as_ref() == Some(wanted) || self.document_id().as_ref() == Some(wanted)
    }

    /// Look up a field, treating `null` as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        let fields = match self {
            Self::Flat(map) => map,
            Self::Nested { attributes, .. } => attributes,
        };
        fields.get(key).filter(|v| !v.is_null())
    }

    /// First present field among `keys`.
    #[must_use]
    pub fn first(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// String value of the first present field, if it is a string.
    #[must_use]
    pub fn string(&self, keys: &[&str]) -> Option<&'a str> {
        self.first(keys).and_then(Value::as_str)
    }

    /// Trimmed, non-empty string value of the first present field.
    #[must_use]
    pub fn non_empty(&self, keys: &[&str]) -> Option<&'a str> {
        self.string(keys).map(str::trim).filter(|s| !s.is_empty())
    }

    /// String value of the first present field, unless it is blank.
    /// Unlike [`Self::non_empty`] the value is returned as sent.
    #[must_use]
    pub fn non_blank(&self, keys: &[&str]) -> Option<&'a str> {
        self.string(keys).filter(|s| !s.trim().is_empty())
    }

    /// Numeric value of the first present field (numbers or numeric strings).
    #[must_use]
    pub fn number(&self, keys: &[&str]) -> Option<f64> {
        self.first(keys).and_then(coerce_number)
    }

    /// Boolean value of the first present field (`true`/`"true"`).
    #[must_use]
    pub fn flag(&self, keys: &[&str]) -> bool {
        match self.first(keys) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// A to-one relation, unwrapped from its `data` envelope.
    #[must_use]
    pub fn relation(&self, keys: &[&str]) -> Option<&'a Value> {
        self.first(keys).and_then(unwrap_relation)
    }

    /// A to-many relation, unwrapped from its `data` envelope.
    ///
    /// Anything other than an array yields an empty slice.
    #[must_use]
    pub fn relation_list(&self, keys: &[&str]) -> &'a [Value] {
        match self.relation(keys) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }
}

/// Strip a `{ "data": ... }` relation wrapper.
///
/// Returns `None` for `null` and for `{ "data": null }`. Values that are not
/// wrappers are returned unchanged.
#[must_use]
pub fn unwrap_relation(value: &Value) -> Option<&Value> {
    match value {
        Value::Null => None,
        Value::Object(map) if is_relation_wrapper(map) => {
            map.get("data").filter(|inner| !inner.is_null())
        }
        other => Some(other),
    }
}

/// A wrapper holds `data` (and optionally `meta`) but no record fields.
fn is_relation_wrapper(map: &Map<String, Value>) -> bool {
    map.contains_key("data") && map.keys().all(|key| key == "data" || key == "meta")
}

/// Coerce a JSON value to a finite number.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
