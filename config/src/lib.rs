//! # Configuration Management for CrossAgg
//!
//! This crate provides centralized configuration structures for the aggregate
//! compiler: which SQL dialect to target and how expressions are rendered.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{AppConfig, DialectConfig, RenderConfig};
//! use dialect::Dialect;
//!
//! let config = AppConfig {
//!     dialect: DialectConfig::new(Dialect::MySql),
//!     render: RenderConfig::new(", ".to_string(), true, false),
//! };
//! assert_eq!(config.dialect.name, Dialect::MySql);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [dialect]
//! name = "postgres"
//! force_filter_emulation = false
//!
//! [render]
//! default_separator = ","
//! strict_identifiers = false
//! log_rendered_sql = false
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from crossagg.toml (or the path in CROSSAGG_CONFIG)
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use dialect::Dialect;
use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./crossagg.toml";
const CONFIG_PATH_VAR: &str = "CROSSAGG_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub dialect: DialectConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Target dialect configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialectConfig {
    pub name: Dialect,
    /// Emulate `FILTER (WHERE ...)` even where the engine supports it
    #[serde(default)]
    pub force_filter_emulation: bool,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_separator")]
    pub default_separator: String,
    #[serde(default)]
    pub strict_identifiers: bool,
    #[serde(default)]
    pub log_rendered_sql: bool,
}

fn default_separator() -> String {
    ",".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_separator: default_separator(),
            strict_identifiers: false,
            log_rendered_sql: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine; the variable may come from the process environment
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.default_separator.contains('\0') {
            return Err(ConfigError::Invalid(
                "Render default_separator cannot contain NUL characters".to_string(),
            ));
        }

        Ok(())
    }
}

impl DialectConfig {
    /// Create a new dialect configuration
    pub fn new(name: Dialect) -> Self {
        Self {
            name,
            force_filter_emulation: false,
        }
    }

    pub fn with_forced_filter_emulation(mut self, force: bool) -> Self {
        self.force_filter_emulation = force;
        self
    }
}

impl RenderConfig {
    /// Create a new render configuration
    pub fn new(default_separator: String, strict_identifiers: bool, log_rendered_sql: bool) -> Self {
        Self {
            default_separator,
            strict_identifiers,
            log_rendered_sql,
        }
    }
}
