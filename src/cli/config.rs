//! Configuration file structure
//!
//! ```json
//! { "data_dir": "./data", "separator": "\t", "has_header": true, "log_level": "info" }
//! ```
//!
//! Only `data_dir` is required.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::Severity;
use crate::university::LoadOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the four input files (required)
    pub data_dir: String,

    /// Field separator, exactly one character (optional, default tab)
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether every input file starts with a header line (optional, default true)
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_separator() -> String {
    "\t".to_string()
}
fn default_has_header() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Default configuration for `data_dir`
    pub fn for_data_dir(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.display().to_string(),
            separator: default_separator(),
            has_header: default_has_header(),
            log_level: default_log_level(),
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config '{}': {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        self.separator_char()?;
        self.log_severity()?;

        Ok(())
    }

    /// Separator as a single character
    pub fn separator_char(&self) -> CliResult<char> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CliError::config_error(format!(
                "Invalid separator: {:?}. Must be exactly one character.",
                self.separator
            ))),
        }
    }

    /// Configured minimum log severity
    pub fn log_severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    /// Convert to load options for `University::load_with`
    pub fn load_options(&self) -> CliResult<LoadOptions> {
        Ok(LoadOptions::new(self.data_path())
            .with_separator(self.separator_char()?)
            .with_header(self.has_header))
    }
}
