//! Form Schema Types
//!
//! Declarative field rules and the TOML layout of a form definition file.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Root form file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormFile {
    pub form: FormMeta,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldRule>,
}

/// Form metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormMeta {
    pub name: String,
    pub description: Option<String>,
}

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Email,
    Password,
    #[default]
    Text,
}

/// Constraints for a single form field
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FieldRule {
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(rename = "minLength")]
    pub min_length: Option<usize>,
    #[serde(rename = "match")]
    pub match_field: Option<String>,
    pub label: Option<String>,
}

impl FieldRule {
    /// Required text field with a label
    pub fn required(label: &str) -> Self {
        Self {
            required: true,
            label: Some(label.to_string()),
            ..Self::default()
        }
    }

    /// Optional text field with a label
    pub fn optional(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Self::default()
        }
    }

    pub fn email(mut self) -> Self {
        self.field_type = FieldType::Email;
        self
    }

    pub fn password(mut self) -> Self {
        self.field_type = FieldType::Password;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Require this field to equal another field's value
    pub fn matches(mut self, other: &str) -> Self {
        self.match_field = Some(other.to_string());
        self
    }

    /// Label used in messages, falling back to the field name
    pub fn display_label<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(field_name)
    }
}

/// Runtime rule set for one form (optimized for lookups)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub name: String,
    pub description: Option<String>,
    pub fields: BTreeMap<String, FieldRule>,
}

impl From<FormFile> for RuleSet {
    fn from(file: FormFile) -> Self {
        Self {
            name: file.form.name,
            description: file.form.description,
            fields: file.fields,
        }
    }
}

impl RuleSet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Builder-style field registration; a later rule replaces an earlier one
    pub fn field(mut self, name: &str, rule: FieldRule) -> Self {
        self.fields.insert(name.to_string(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields whose `match` target is not defined in this form, as (field, target)
    pub fn dangling_matches(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(name, rule)| {
                let target = rule.match_field.as_deref()?;
                (!self.fields.contains_key(target)).then_some((name.as_str(), target))
            })
            .collect()
    }

    /// Parse a form definition from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<FormFile>(content).map(Self::from)
    }
}
