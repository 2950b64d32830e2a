use dialect::{Dialect, DispatchError};
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while rendering expressions to SQL text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Missing arguments for {function}")]
    MissingArguments { function: String },

    #[error("Operation {operation} is not supported by the {dialect} dialect")]
    DialectUnsupportedOperation { operation: String, dialect: Dialect },

    #[error("Aggregate function {function} is not supported by the {dialect} dialect")]
    AggregateUnsupportedFunction { function: String, dialect: Dialect },

    #[error("Placeholder mismatch in '{sql}': {placeholders} placeholders for {args} arguments")]
    PlaceholderMismatch {
        sql: String,
        placeholders: usize,
        args: usize,
    },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ValidationError),
}

impl From<DispatchError> for RenderError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Unsupported { operation, dialect } => {
                RenderError::DialectUnsupportedOperation {
                    operation: operation.to_string(),
                    dialect,
                }
            }
        }
    }
}

impl RenderError {
    pub fn missing_arguments(function: impl Into<String>) -> Self {
        RenderError::MissingArguments {
            function: function.into(),
        }
    }

    pub fn unsupported_function(function: impl Into<String>, dialect: Dialect) -> Self {
        RenderError::AggregateUnsupportedFunction {
            function: function.into(),
            dialect,
        }
    }

    pub fn unsupported_operation(operation: impl Into<String>, dialect: Dialect) -> Self {
        RenderError::DialectUnsupportedOperation {
            operation: operation.into(),
            dialect,
        }
    }
}
