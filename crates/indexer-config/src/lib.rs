//! Configuration management for the heading indexer.
//!
//! Parses `indexer.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Every section and field is optional:
//!
//! ```toml
//! [headings]
//! start_level = 2
//! id_prefix = "id-"
//!
//! [list]
//! ol_style = "margin-left: 1.3em;"
//! ul_style = "margin-left: 1.3em;"
//! li_style = "list-style:inherit;"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "indexer.toml";

/// Highest heading level the single-digit tag pattern can express.
const MAX_LEVEL: u8 = 9;

/// Indexer configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading numbering configuration.
    pub headings: HeadingsConfig,
    /// Table of contents list styling.
    pub list: ListConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Heading numbering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeadingsConfig {
    /// First heading level that gets numbered.
    ///
    /// Level 1 is normally the page title, so numbering starts at `h2`.
    pub start_level: u8,
    /// Prefix for hash-derived anchor ids.
    pub id_prefix: String,
}

impl Default for HeadingsConfig {
    fn default() -> Self {
        Self {
            start_level: 2,
            id_prefix: "id-".to_owned(),
        }
    }
}

/// Inline styles for the generated table of contents.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Style of the outer `<ol>`.
    pub ol_style: String,
    /// Style of the nested `<ul>`.
    pub ul_style: String,
    /// Style of every `<li>`.
    pub li_style: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            ol_style: "margin-left: 1.3em;".to_owned(),
            ul_style: "margin-left: 1.3em;".to_owned(),
            li_style: "list-style:inherit;".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a string field to be usable inside a double-quoted attribute.
fn require_attr_safe(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.contains('"') {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain double quotes"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `indexer.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a value is out of range.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_headings()?;
        self.validate_list()?;
        Ok(())
    }

    fn validate_headings(&self) -> Result<(), ConfigError> {
        let level = self.headings.start_level;
        if level == 0 || level > MAX_LEVEL {
            return Err(ConfigError::Validation(format!(
                "headings.start_level must be between 1 and {MAX_LEVEL}"
            )));
        }
        require_non_empty(&self.headings.id_prefix, "headings.id_prefix")?;
        require_attr_safe(&self.headings.id_prefix, "headings.id_prefix")?;
        Ok(())
    }

    fn validate_list(&self) -> Result<(), ConfigError> {
        require_attr_safe(&self.list.ol_style, "list.ol_style")?;
        require_attr_safe(&self.list.ul_style, "list.ul_style")?;
        require_attr_safe(&self.list.li_style, "list.li_style")?;
        Ok(())
    }
}
