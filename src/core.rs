//! Core CrossAgg functionality
//!
//! This module contains the compiler facade, which binds configuration to
//! per-query aggregate factories.

use config::{AppConfig, DialectConfig};
use dialect::Dialect;
use sql_expr::RenderOptions;

use crate::errors::CrossAggError;
use crate::query::AggregateQuery;

/// Aggregate compiler bound to one configuration
#[derive(Debug, Clone)]
pub struct CrossAgg {
    config: AppConfig,
}

impl CrossAgg {
    /// Create a compiler from an already loaded configuration
    pub fn new(config: AppConfig) -> Result<Self, CrossAggError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a compiler from `crossagg.toml` (see [`AppConfig::load`])
    pub fn load() -> Result<Self, CrossAggError> {
        Self::new(AppConfig::load()?)
    }

    /// Default configuration targeting `dialect`
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            config: AppConfig {
                dialect: DialectConfig::new(dialect),
                ..AppConfig::default()
            },
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn dialect(&self) -> Dialect {
        self.config.dialect.name
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            force_filter_emulation: self.config.dialect.force_filter_emulation,
            strict_identifiers: self.config.render.strict_identifiers,
        }
    }

    /// Start a query bound to the configured dialect and render options
    pub fn query(&self) -> AggregateQuery {
        AggregateQuery::new(self.dialect())
            .with_options(self.render_options())
            .with_default_separator(self.config.render.default_separator.as_str())
            .with_sql_logging(self.config.render.log_rendered_sql)
    }
}
