//! Aggregate function builders
//!
//! One builder per aggregate family. Each owns its function name seed and
//! the dialect rewrites its SQL function needs.

pub mod array_agg;
pub mod bitwise;
pub mod boolean;
pub mod count;
pub mod json_agg;
pub mod numeric;
pub mod statistical;
pub mod string_agg;

pub use array_agg::ArrayAgg;
pub use bitwise::{BitAnd, BitOr};
pub use boolean::{BoolAnd, BoolOr};
pub use count::Count;
pub use json_agg::{JsonArrayAgg, JsonObjectAgg};
pub use numeric::{Avg, Max, Min, Sum};
pub use statistical::{StdDev, Variance};
pub use string_agg::StringAgg;
