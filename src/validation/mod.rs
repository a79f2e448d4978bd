//! Validation Engine
//!
//! Pure rule evaluation, separated from form loading and the CLI.

pub mod checks;
pub mod engine;
pub mod messages;

pub use engine::{validate, validate_field, ValidationResult};
