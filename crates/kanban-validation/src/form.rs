// File: src/form.rs
// Purpose: Submitted form values, keyed by field name

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Raw key-value data submitted with one request.
///
/// A key that is missing from the map means the field was not provided at
/// all, which is different from a field submitted as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    fields: HashMap<String, String>,
}

impl FormValues {
    /// Create empty form values
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Create from submitted fields, trimming surrounding whitespace
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();

        Self { fields }
    }

    /// Create from a JSON object. Strings are trimmed, other scalars keep
    /// their JSON text (`30`, `true`), `null` counts as not provided.
    pub fn from_json(json: &JsonValue) -> Self {
        let fields = json
            .as_object()
            .map(|map| {
                map.iter()
                    .filter_map(|(key, value)| match value {
                        JsonValue::Null => None,
                        JsonValue::String(s) => Some((key.clone(), s.trim().to_string())),
                        other => Some((key.clone(), other.to_string())),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { fields }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    /// Get a submitted value, `None` when the field was not provided
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Get a value parsed as a specific type
    pub fn get_as<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.fields.get(key)?.parse().ok()
    }

    /// Check if a field was provided
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
