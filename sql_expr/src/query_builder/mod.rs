//! Condition and ordering builders
//!
//! Predicates for `FILTER (WHERE ...)` clauses and terms for aggregate
//! `ORDER BY` lists, plus the SQL generation shared by both.

pub mod filter;
pub mod ordering;
pub mod sql_generation;

pub use filter::{Comparison, QueryFilter};
pub use ordering::{NullsOrder, OrderTerm, SortOrder};
pub use sql_generation::SqlGenerator;
