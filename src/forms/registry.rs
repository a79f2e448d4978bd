//! Form Registry
//!
//! In-memory collection of named rule sets. Each form remembers where it came
//! from so that user and workspace definitions can override built-in ones.

use super::schema::RuleSet;
use std::collections::HashMap;
use std::path::PathBuf;

/// Built-in form definitions embedded in the binary, as (file name, content)
const BUILTIN_FORMS: &[(&str, &str)] = &[
    ("login.toml", include_str!("../../resources/forms/login.toml")),
    ("register.toml", include_str!("../../resources/forms/register.toml")),
    ("profile.toml", include_str!("../../resources/forms/profile.toml")),
    ("invite.toml", include_str!("../../resources/forms/invite.toml")),
    (
        "reset_password.toml",
        include_str!("../../resources/forms/reset_password.toml"),
    ),
];

/// Where a form definition was loaded from, lowest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormPriority {
    BuiltIn,
    UserGlobal,
    Workspace,
}

/// A rule set together with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedForm {
    pub rules: RuleSet,
    pub priority: FormPriority,
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct FormRegistry {
    forms: HashMap<String, LoadedForm>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the embedded forms
    pub fn with_builtin_forms() -> Self {
        let mut registry = Self::new();
        registry.add_builtin_forms();
        registry
    }

    /// Parse and register every embedded form. A form that fails to parse is skipped.
    pub fn add_builtin_forms(&mut self) {
        for (file_name, content) in BUILTIN_FORMS {
            match RuleSet::from_toml_str(content) {
                Ok(rules) => {
                    self.add(rules, FormPriority::BuiltIn, None);
                }
                Err(e) => {
                    log::error!("Failed to parse built-in form {}: {}", file_name, e);
                }
            }
        }
    }

    /// Register a form. Returns false if an existing form with higher priority was kept.
    pub fn add(
        &mut self,
        rules: RuleSet,
        priority: FormPriority,
        source_path: Option<PathBuf>,
    ) -> bool {
        if let Some(existing) = self.forms.get(&rules.name) {
            if priority < existing.priority {
                log::debug!(
                    "Keeping {:?} form '{}' over {:?} definition",
                    existing.priority,
                    rules.name,
                    priority
                );
                return false;
            }
        }

        for (field, target) in rules.dangling_matches() {
            log::warn!(
                "Form '{}': field '{}' must match undefined field '{}'",
                rules.name,
                field,
                target
            );
        }

        self.forms.insert(
            rules.name.clone(),
            LoadedForm {
                rules,
                priority,
                source_path,
            },
        );
        true
    }

    pub fn get(&self, name: &str) -> Option<&LoadedForm> {
        self.forms.get(name)
    }

    /// Rule set for a form name
    pub fn rules(&self, name: &str) -> Option<&RuleSet> {
        self.get(name).map(|form| &form.rules)
    }

    /// Sorted form names
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.forms.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
