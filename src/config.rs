//! Catalog configuration
//!
//! Loaded from a JSON file (default `./plants.json`). Every field has a
//! default, so `{}` is a valid configuration.
//!
//! ```json
//! {
//!   "database_root": "./data",
//!   "database_name": "plants.db",
//!   "table": "plants",
//!   "busy_timeout_ms": 2000,
//!   "page_size": 10,
//!   "debug": false,
//!   "http": { "host": "127.0.0.1", "port": 8080 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::DataSourceConfig;
use crate::observability::{log_event, Event};
use crate::web::HttpServerConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding the database file
    #[serde(default = "default_database_root")]
    pub database_root: String,

    /// Database file name inside `database_root`
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Catalog table name
    #[serde(default = "default_table")]
    pub table: String,

    /// Busy timeout for each connection, in milliseconds (optional)
    #[serde(default)]
    pub busy_timeout_ms: Option<u64>,

    /// Records per HTML page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Echo results as text to the log and show image names
    #[serde(default)]
    pub debug: bool,

    /// Web front end settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_database_root() -> String {
    "./data".to_string()
}
fn default_database_name() -> String {
    "plants.db".to_string()
}
fn default_table() -> String {
    "plants".to_string()
}
fn default_page_size() -> usize {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_root: default_database_root(),
            database_name: default_database_name(),
            table: default_table(),
            busy_timeout_ms: None,
            page_size: default_page_size(),
            debug: false,
            http: HttpServerConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), database = %config.database_path().display());
        log_event(Event::ConfigLoaded);

        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_name.trim().is_empty() {
            return Err(ConfigError::Invalid("database_name must not be empty".into()));
        }

        if !is_identifier(&self.table) {
            return Err(ConfigError::Invalid(format!(
                "Invalid table: '{}'. Use letters, digits and '_' only.",
                self.table
            )));
        }

        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be > 0".into()));
        }

        Ok(())
    }

    /// Full path of the database file
    pub fn database_path(&self) -> PathBuf {
        Path::new(&self.database_root).join(&self.database_name)
    }

    /// Data source settings for the projector
    pub fn data_source(&self) -> DataSourceConfig {
        let source = DataSourceConfig::new(self.database_path(), self.table.clone());
        match self.busy_timeout_ms {
            Some(ms) => source.with_busy_timeout(Duration::from_millis(ms)),
            None => source,
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
