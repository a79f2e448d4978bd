//! formcheck
//!
//! Declarative validation of submitted form values.
//!
//! This library provides:
//! - Field rules and form definitions loaded from TOML
//! - A pure validation engine producing per-field messages
//! - Parsing of submitted values from JSON or `key=value` pairs
//! - Configuration and the `formcheck` command-line front end

pub mod cli;
pub mod config;
pub mod forms;
pub mod validation;
pub mod values;

// Re-exports for clean public API
pub use config::Config;
pub use forms::{FieldRule, FieldType, FormRegistry, RuleSet};
pub use validation::{validate, ValidationResult};
pub use values::FormValues;
