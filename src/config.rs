//! Configuration management for formcheck.
//!
//! Handles:
//! - Command-line argument parsing
//! - Form directory configuration

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for formcheck
#[derive(Debug, Parser)]
#[command(name = "formcheck")]
#[command(about = "Validate submitted form values against declarative field rules")]
#[command(version)]
pub struct Args {
    /// Name of a known form to validate against
    #[arg(long, help = "Form to validate against (e.g., 'login', 'register')")]
    pub form: Option<String>,

    /// Ad-hoc form definition file
    #[arg(long, help = "Form definition TOML file to validate against")]
    pub rules: Option<PathBuf>,

    /// Extra directory to search for form definitions
    #[arg(long, help = "Directory containing form TOML files")]
    pub forms_dir: Option<PathBuf>,

    /// JSON document holding the submitted values
    #[arg(long, help = "JSON file with submitted values ('-' for stdin)")]
    pub values: Option<PathBuf>,

    /// Individual values
    #[arg(long = "set", value_name = "KEY=VALUE", help = "Set a field value")]
    pub set: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List available forms and exit
    #[arg(long)]
    pub list: bool,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What the invocation should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate against a form from the registry
    Validate(String),
    /// Validate against a definition file
    ValidateFile(PathBuf),
    /// Print known form names
    List,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    /// Form directories, lowest priority first
    pub form_dirs: Vec<PathBuf>,
    pub values_path: Option<PathBuf>,
    pub value_pairs: Vec<String>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let command = match (args.list, args.form, args.rules) {
            (true, _, _) => Command::List,
            (false, Some(_), Some(_)) => bail!("--form and --rules cannot be used together"),
            (false, Some(name), None) => Command::Validate(name),
            (false, None, Some(path)) => Command::ValidateFile(path),
            (false, None, None) => bail!("one of --form, --rules or --list is required"),
        };

        let mut form_dirs = default_form_directories();
        if let Some(custom_dir) = args.forms_dir {
            form_dirs.push(custom_dir);
        }

        Ok(Config {
            command,
            form_dirs,
            values_path: args.values,
            value_pairs: args.set,
            format: args.format,
            log_level: args.log_level,
        })
    }
}

/// User config directory first, then the current workspace
fn default_form_directories() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    // ~/.config/formcheck/forms/
    if let Some(config_dir) = dirs::config_dir() {
        dirs.push(config_dir.join("formcheck").join("forms"));
    }

    // ./.formcheck/forms/
    dirs.push(PathBuf::from(".formcheck").join("forms"));

    dirs
}
