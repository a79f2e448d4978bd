//! Form loading from disk.
//!
//! Loading priority: built-in < user-global < workspace. The first configured
//! directory is treated as user-global, every later one as workspace.

use std::path::Path;

use anyhow::{Context, Result};

use super::registry::{FormPriority, FormRegistry};
use super::schema::RuleSet;
use crate::config::Config;

/// Build a registry from the embedded forms and every configured directory
pub async fn load_forms(config: &Config) -> Result<FormRegistry> {
    let mut registry = FormRegistry::with_builtin_forms();

    for (i, dir) in config.form_dirs.iter().enumerate() {
        let priority = if i == 0 {
            FormPriority::UserGlobal
        } else {
            FormPriority::Workspace
        };
        load_forms_from_directory(dir, priority, &mut registry).await?;
    }

    log::info!("Loaded {} form definition(s)", registry.len());
    Ok(registry)
}

/// Load every `*.toml` form in a directory. Unreadable or invalid files are skipped.
pub async fn load_forms_from_directory(
    dir: &Path,
    priority: FormPriority,
    registry: &mut FormRegistry,
) -> Result<()> {
    if !tokio::fs::try_exists(dir).await.unwrap_or(false) {
        log::debug!("Form directory {} does not exist, skipping", dir.display());
        return Ok(());
    }

    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read form directory: {}", dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            continue;
        }

        match load_form_file(&path).await {
            Ok(rules) => {
                log::debug!("Loaded form '{}' from {}", rules.name, path.display());
                registry.add(rules, priority, Some(path));
            }
            Err(e) => {
                log::warn!("Skipping form file {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(())
}

/// Read and parse a single form definition file
pub async fn load_form_file(path: &Path) -> Result<RuleSet> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;

    RuleSet::from_toml_str(&content)
        .with_context(|| format!("Failed to parse form TOML: {}", path.display()))
}
