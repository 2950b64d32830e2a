//! Aggregate - aggregate function builders for CrossAgg
//!
//! Builders for every supported aggregate family, the capability traits they
//! compose, and the render engine that turns a configured builder into SQL
//! for the active dialect, emulating `FILTER (WHERE ...)` where the dialect
//! has no such clause.

pub mod expression;
pub mod functions;
pub mod prelude;
pub mod traits;

pub use expression::{
    AggregateExpression, AggregateFamily, FilterEmulation, NullsMode, RenderPlan, StatisticalMode,
};
pub use functions::{
    ArrayAgg, Avg, BitAnd, BitOr, BoolAnd, BoolOr, Count, JsonArrayAgg, JsonObjectAgg, Max, Min,
    StdDev, StringAgg, Sum, Variance,
};
pub use traits::{Aggregate, Distinctable, NullHandling, Orderable, Statistical};

#[doc(hidden)]
pub use tracing;

// Debug logging macros (feature-gated)
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}
