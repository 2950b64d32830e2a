//! SQL Expression - dialect-aware expression rendering for CrossAgg
//!
//! This crate provides the building blocks aggregate functions are made of:
//! an output buffer with per-dialect placeholders, column and raw SQL
//! expressions, filter conditions, ordering terms and identifier validation.

pub mod buffer;
pub mod errors;
pub mod expression;
pub mod prelude;
pub mod query_builder;
pub mod validation;

pub use buffer::{RenderOptions, SqlBuffer, ToSql};
pub use errors::RenderError;
pub use expression::{CaseExpression, Expression};
pub use query_builder::{Comparison, NullsOrder, OrderTerm, QueryFilter, SortOrder, SqlGenerator};
pub use validation::{ValidatedColumn, ValidationError};
