//! Convenience re-exports for common expression usage

// Rendering
pub use crate::buffer::{RenderOptions, SqlBuffer, ToSql};

// Error types
pub use crate::errors::RenderError;

// Expressions and their constructors
pub use crate::expression::{
    case, column, expr, exprs, is_not_null, literal, raw, text, CaseExpression, Expression,
};

// Conditions and ordering
pub use crate::query_builder::{Comparison, NullsOrder, OrderTerm, QueryFilter, SortOrder};

// Validation
pub use crate::validation::{ValidatedColumn, ValidationError};

pub use dialect::Dialect;
pub use serde_json::{json, Value};
