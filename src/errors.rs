//! Error types for the CrossAgg crate
//!
//! This module contains the top-level error returned by the compiler facade.

use config::ConfigError;
use sql_expr::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrossAggError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
