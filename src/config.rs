//! User configuration
//!
//! Read from `$XDG_CONFIG_HOME/emagraph/config.toml` (or `--config`). Every
//! key is optional; command-line flags override file values, and file values
//! override the built-in defaults.
//!
//! ```toml
//! [export]
//! url = "http://127.0.0.1:8000/-/export.json"
//! timeout_secs = 120
//!
//! [render]
//! engine = "fdp"
//! format = "svg"
//! output_dir = "graphs"
//! include_edge_notes = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::export::DEFAULT_EXPORT_URL;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Total request timeout for fetching the export
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub export: ExportConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub engine: Option<String>,
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub include_edge_notes: Option<bool>,
}

impl Config {
    /// Default location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("emagraph").join(CONFIG_FILE_NAME))
    }

    /// Load configuration.
    ///
    /// An explicitly given path must exist. A missing file at the default
    /// location yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn export_url(&self) -> &str {
        self.export.url.as_deref().unwrap_or(DEFAULT_EXPORT_URL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.export.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
