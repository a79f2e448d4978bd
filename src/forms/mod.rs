//! Form definitions: schema, registry and on-disk loading.

pub mod loader;
pub mod registry;
pub mod schema;

pub use loader::{load_form_file, load_forms, load_forms_from_directory};
pub use registry::{FormPriority, FormRegistry, LoadedForm};
pub use schema::{FieldRule, FieldType, FormFile, FormMeta, RuleSet};
