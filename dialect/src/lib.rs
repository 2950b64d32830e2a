//! SQL dialect knowledge shared across the crossagg ecosystem
//!
//! This crate names the supported database engines, describes which aggregate
//! syntax each of them understands, and provides the dispatch facility used to
//! select a per-dialect rewrite strategy.

pub mod dispatch;
pub mod errors;
pub mod types;

pub use dispatch::DialectHandlers;
pub use errors::{DispatchError, ParseDialectError};
pub use types::{Dialect, PlaceholderStyle};
