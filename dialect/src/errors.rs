//! Error types for dialect handling
//!
//! This module defines the errors raised while parsing dialect names
//! and while dispatching to per-dialect handlers.

use thiserror::Error;

use crate::types::Dialect;

/// Dispatch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Operation {operation} has no handler for the {dialect} dialect")]
    Unsupported {
        operation: &'static str,
        dialect: Dialect,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown SQL dialect: {0}")]
pub struct ParseDialectError(pub String);
