use crate::error::{Error, Result};
use crate::model::Column;
use crate::parser::Strategy;
use crate::report::{ReportFormat, NO_RECORDS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for studentxml runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parsing strategy used when none is given on the command line
    pub strategy: Strategy,

    /// Column to sort parsed rows by
    pub sort: Option<Column>,

    /// Run the structural check before parsing
    pub validate: bool,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: table, json
    pub format: ReportFormat,

    /// Printed instead of an empty table
    pub empty_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            sort: None,
            validate: true,
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Table,
            empty_message: NO_RECORDS.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let invalid = |message: String| Error::Config {
            path: path.to_path_buf(),
            message,
        };

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents).map_err(|e| invalid(e.to_string())),
            "toml" => toml::from_str(&contents).map_err(|e| invalid(e.to_string())),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents).map_err(|e| invalid(e.to_string()))
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(dir: &Path) -> Result<Self> {
        let default_names = [
            ".studentxml.yml",
            ".studentxml.yaml",
            ".studentxml.toml",
            "studentxml.yml",
            "studentxml.yaml",
            "studentxml.toml",
        ];

        for name in &default_names {
            let path = dir.join(name);
            if path.exists() {
                debug!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }
}
