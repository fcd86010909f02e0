//! Configuration Management
//!
//! Loads auditor configuration from an optional `factlint.toml`:
//! - Content file name convention (which files hold quiz/exam records)
//! - Directories to skip during the walk
//! - Default report format
//!
//! Every field has a default, so running without a config file works.

use crate::errors::FactlintError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default name of the config file discovered in the working directory.
pub const CONFIG_FILE: &str = "factlint.toml";

/// Default name of the content files the locator searches for.
pub const DEFAULT_CONTENT_FILE: &str = "questions.json";

/// Output format for audit reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File name the locator matches during the walk
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Directory names never descended into
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Default report format (CLI `--format` overrides)
    #[serde(default)]
    pub format: ReportFormat,

    /// Suppress the summary, print violations only (set via CLI, not persisted)
    #[serde(skip)]
    pub quiet: bool,
}

fn default_file_name() -> String {
    DEFAULT_CONTENT_FILE.to_string()
}

fn default_skip_dirs() -> Vec<String> {
    vec![
        ".git".to_string(),
        "node_modules".to_string(),
        "target".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            skip_dirs: default_skip_dirs(),
            format: ReportFormat::default(),
            quiet: false,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path`, the file must exist and parse. Without one,
    /// `factlint.toml` in the working directory is used if present, and the
    /// defaults otherwise.
    pub fn load(path: Option<&str>) -> Result<Self, FactlintError> {
        match path {
            Some(p) => Self::from_file(Path::new(p)),
            None => {
                let discovered = Path::new(CONFIG_FILE);
                if discovered.is_file() {
                    Self::from_file(discovered)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, FactlintError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FactlintError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            FactlintError::Config(format!("cannot parse {}: {}", path.display(), e))
        })
    }
}
