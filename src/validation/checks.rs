//! Small predicates shared by the validation engine.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// True when the value is absent, empty, or whitespace-only
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Loose `local@domain.tld` check: no whitespace, a single `@`, a dot in the domain
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Exact comparison used for confirmation fields. Two absent values are equal.
pub fn values_match(value: Option<&str>, other: Option<&str>) -> bool {
    value == other
}
