//! Command-line front end: resolve the form, read values, validate, report.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::config::{Command, Config, OutputFormat};
use crate::forms::{load_form_file, load_forms, RuleSet};
use crate::validation::{validate, ValidationResult};
use crate::values::FormValues;

/// Process exit status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

/// Execute the configured command, writing the report to stdout
pub async fn run(config: &Config) -> Result<Outcome> {
    let rules = match &config.command {
        Command::List => {
            let registry = load_forms(config).await?;
            for name in registry.list_names() {
                println!("{}", name);
            }
            return Ok(Outcome::Valid);
        }
        Command::Validate(name) => {
            let registry = load_forms(config).await?;
            match registry.rules(name) {
                Some(rules) => rules.clone(),
                None => anyhow::bail!(
                    "Unknown form '{}' (available: {})",
                    name,
                    registry.list_names().join(", ")
                ),
            }
        }
        Command::ValidateFile(path) => load_form_file(path).await?,
    };

    let values = read_values(config).await?;
    let result = validate(&rules, &values);

    println!("{}", render(&rules, &result, config.format)?);

    Ok(if result.is_valid() {
        Outcome::Valid
    } else {
        Outcome::Invalid
    })
}

/// Collect values from `--values` then overlay `--set` pairs
pub async fn read_values(config: &Config) -> Result<FormValues> {
    let mut values = match &config.values_path {
        Some(path) => FormValues::from_json_str(&read_values_document(path).await?)?,
        None => FormValues::new(),
    };
    values.merge(FormValues::from_pairs(&config.value_pairs)?);
    Ok(values)
}

async fn read_values_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .context("Failed to read values from stdin")?;
        return Ok(content);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read values file: {}", path.display()))
}

/// Format a result for the terminal or for machines
pub fn render(rules: &RuleSet, result: &ValidationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => {
            if result.is_valid() {
                return Ok(format!("OK: form '{}' is valid", rules.name));
            }
            let lines: Vec<String> = result
                .errors()
                .iter()
                .map(|(field, message)| format!("{}: {}", field, message))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
