//! Submitted form values.
//!
//! Values arrive either as a JSON object or as `key=value` pairs from the
//! command line. Everything is stored as text; `null` means the field was
//! not submitted.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Mapping from field name to submitted value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay another set of values; entries in `other` win
    pub fn merge(&mut self, other: FormValues) {
        self.values.extend(other.values);
    }

    /// Parse a JSON document whose top level is an object
    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(content).context("Failed to parse values JSON")?;
        let Value::Object(map) = doc else {
            bail!("Values JSON must be an object of field names to values");
        };

        let mut values = Self::new();
        for (field, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => values.insert(field, s),
                Value::Bool(b) => values.insert(field, b.to_string()),
                Value::Number(n) => values.insert(field, n.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    bail!("Value for field '{}' must be a string, number or boolean", field)
                }
            }
        }

        Ok(values)
    }

    /// Parse `key=value` items, splitting on the first `=`
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((field, value)) = pair.split_once('=') else {
                bail!("Expected key=value, got '{}'", pair);
            };
            if field.is_empty() {
                bail!("Missing field name in '{}'", pair);
            }
            values.insert(field, value);
        }
        Ok(values)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut values = Self::new();
        for (field, value) in iter {
            values.insert(field, value);
        }
        values
    }
}
