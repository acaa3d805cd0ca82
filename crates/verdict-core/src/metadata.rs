//! Metadata attached to an outcome.
//!
//! Metadata is an insertion-ordered map from string keys to JSON values.
//! Keys are unique: [`Metadata::insert`] refuses to overwrite an existing key.

use crate::error::{VerdictError, VerdictResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key/value annotations carried by an outcome.
///
/// # Example
///
/// ```
/// use verdict_core::Metadata;
/// use serde_json::json;
///
/// let mut metadata = Metadata::new();
/// metadata.insert("traceId", json!("abc-123")).unwrap();
///
/// assert_eq!(metadata.get("traceId"), Some(&json!("abc-123")));
/// assert!(metadata.insert("traceId", json!("other")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: IndexMap<String, Value>,
}

impl Metadata {
    /// Creates an empty metadata map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// Returns `VerdictError::DuplicateMetadataKey` if `key` is already
    /// present. The existing value is left untouched.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> VerdictResult<()> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            tracing::debug!(key = %key, "rejected duplicate metadata key");
            return Err(VerdictError::duplicate_metadata_key(key));
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// Inserts a new entry from any serializable value.
    ///
    /// The value is encoded when inserted, so an unencodable value is
    /// reported here instead of when the outcome is serialized.
    ///
    /// # Errors
    ///
    /// Returns `VerdictError::DuplicateMetadataKey` if `key` is already
    /// present, or `VerdictError::Serialization` if `value` cannot be encoded.
    pub fn insert_serialized<V: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &V,
    ) -> VerdictResult<()> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            tracing::debug!(key = %key, "rejected duplicate metadata key");
            return Err(VerdictError::duplicate_metadata_key(key));
        }
        let value = serde_json::to_value(value)?;
        self.entries.insert(key, value);
        Ok(())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl std::ops::Index<&str> for Metadata {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<IndexMap<String, Value>> for Metadata {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}
