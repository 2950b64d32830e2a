//! # CrossAgg
//!
//! A cross-dialect SQL aggregate-expression compiler. Aggregates are built
//! once through a dialect-neutral API and rendered for PostgreSQL, MySQL or
//! SQLite, with `FILTER (WHERE ...)`, string aggregation, JSON collection,
//! bitwise, boolean and statistical aggregates rewritten where an engine
//! lacks the native form.
//!
//! ## Quick Start
//!
//! ```rust
//! use crossagg::prelude::*;
//!
//! let crossagg = CrossAgg::with_dialect(Dialect::MySql);
//! let mut query = crossagg.query();
//!
//! query.select(SelectItem::field("author_id"));
//! query.select(
//!     query
//!         .count()
//!         .all()
//!         .filter(raw("status = 'published'"))
//!         .alias("published_posts"),
//! );
//! query.select(
//!     query
//!         .string_agg()
//!         .column("title")
//!         .order_by_desc(["view_count"])
//!         .alias("titles"),
//! );
//!
//! let (sql, params) = query.build_select_clause().unwrap();
//! assert_eq!(
//!     sql,
//!     "author_id, SUM(CASE WHEN status = 'published' THEN 1 ELSE 0 END) AS published_posts, \
//!      GROUP_CONCAT(title ORDER BY view_count DESC SEPARATOR ',') AS titles"
//! );
//! assert!(params.is_empty());
//! ```

pub mod core;
pub mod errors;
pub mod prelude;
pub mod projection;
pub mod query;

// Re-export the main public types for convenience
pub use crate::core::CrossAgg;
pub use errors::CrossAggError;
pub use projection::SelectItem;
pub use query::AggregateQuery;

// Re-export workspace crates
pub use aggregate;
pub use config;
pub use dialect;
pub use sql_expr;
