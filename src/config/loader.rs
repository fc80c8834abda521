// Configuration loader

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for a refscan run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target directories to analyze
    pub targets: Vec<PathBuf>,

    /// Path substrings to exclude from analysis
    pub exclude: Vec<String>,

    /// Report configuration
    pub report: ReportConfig,

    /// Per-rule toggles
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json, sarif
    pub format: String,

    /// Show offending snippets in terminal output
    pub show_snippets: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub unused_variable: bool,
    pub unused_function: bool,
    pub unused_class: bool,
    pub unused_field: bool,
    pub unused_method: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            exclude: vec![
                "node_modules".to_string(),
                "dist".to_string(),
                "build".to_string(),
            ],
            report: ReportConfig::default(),
            rules: RulesConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
            show_snippets: true,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            unused_variable: true,
            unused_function: true,
            unused_class: true,
            unused_field: true,
            unused_method: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from the default locations under `root`, falling back to defaults
    pub fn from_default_locations(root: &Path) -> Result<Self> {
        for name in ["refscan.toml", ".refscan.toml"] {
            let candidate = root.join(name);
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }
        Ok(Self::default())
    }
}
