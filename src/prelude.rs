//! Convenience re-exports for common CrossAgg usage
//!
//! ```rust
//! use crossagg::prelude::*;
//!
//! let (sql, _) = Sum::new().column("view_count").to_sql(Dialect::Postgres).unwrap();
//! assert_eq!(sql, "SUM(view_count)");
//! ```

// Core CrossAgg components
pub use crate::core::CrossAgg;
pub use crate::errors::CrossAggError;
pub use crate::projection::SelectItem;
pub use crate::query::AggregateQuery;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DialectConfig, RenderConfig};

// Dialects and dispatch
pub use dialect::{Dialect, DialectHandlers};

// Aggregate builders and their traits
pub use aggregate::prelude::*;

// Expressions, conditions and ordering
pub use sql_expr::prelude::*;
