//! Convenience re-exports for building aggregates

// Builder traits
pub use crate::traits::{Aggregate, Distinctable, NullHandling, Orderable, Statistical};

// Builders
pub use crate::functions::{
    ArrayAgg, Avg, BitAnd, BitOr, BoolAnd, BoolOr, Count, JsonArrayAgg, JsonObjectAgg, Max, Min,
    StdDev, StringAgg, Sum, Variance,
};

// Render state
pub use crate::expression::{AggregateExpression, AggregateFamily, NullsMode, StatisticalMode};
