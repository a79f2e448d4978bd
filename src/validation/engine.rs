//! Validation Engine
//!
//! Evaluates a form's field rules against submitted values. Each field is
//! checked on its own and stops at its first violated rule, in this order:
//! required, email, password, minimum length, match.

use serde::Serialize;
use std::collections::BTreeMap;

use super::checks::{is_blank, is_valid_email, values_match};
use super::messages;
use crate::forms::{FieldRule, FieldType, RuleSet};
use crate::values::FormValues;

/// Outcome of validating one form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: BTreeMap<String, String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::from_errors(BTreeMap::new())
    }

    /// Build a result from per-field messages; validity follows from emptiness
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Message for a field, if it failed
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

/// Validate submitted values against a rule set
pub fn validate(rules: &RuleSet, values: &FormValues) -> ValidationResult {
    let errors: BTreeMap<String, String> = rules
        .fields
        .iter()
        .filter_map(|(name, rule)| {
            validate_field(name, rule, values).map(|message| (name.clone(), message))
        })
        .collect();

    log::debug!(
        "Validated form '{}': {} field(s), {} error(s)",
        rules.name,
        rules.len(),
        errors.len()
    );

    ValidationResult::from_errors(errors)
}

/// First violated rule for a single field, if any
pub fn validate_field(name: &str, rule: &FieldRule, values: &FormValues) -> Option<String> {
    let value = values.get(name);
    let label = rule.display_label(name);

    if rule.required && is_blank(value) {
        return Some(messages::required(label));
    }

    // Optional checks only look at non-empty values
    let present = value.filter(|v| !v.is_empty());

    if let Some(v) = present {
        match rule.field_type {
            FieldType::Email if !is_valid_email(v) => {
                return Some(messages::INVALID_EMAIL.to_string());
            }
            FieldType::Password if v.chars().count() < messages::PASSWORD_MIN_LENGTH => {
                return Some(messages::PASSWORD_TOO_SHORT.to_string());
            }
            _ => {}
        }

        if let Some(min) = rule.min_length {
            if v.chars().count() < min {
                return Some(messages::too_short(label, min));
            }
        }
    }

    if let Some(other) = &rule.match_field {
        if !values_match(value, values.get(other)) {
            log::trace!("Field '{}' does not match '{}'", name, other);
            return Some(messages::PASSWORDS_DO_NOT_MATCH.to_string());
        }
    }

    None
}
