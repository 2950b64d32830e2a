//! SUM, AVG, MIN and MAX
//!
//! Standard SQL on every dialect, so none of these need a rewrite.

use crate::expression::{AggregateExpression, AggregateFamily};
use crate::traits::{Aggregate, Distinctable};

macro_rules! numeric_aggregate {
    ($(#[$meta:meta])* $name:ident, $family:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            expression: AggregateExpression,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    expression: AggregateExpression::new($family),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Aggregate for $name {
            fn expression(&self) -> &AggregateExpression {
                &self.expression
            }

            fn expression_mut(&mut self) -> &mut AggregateExpression {
                &mut self.expression
            }
        }
    };
}

numeric_aggregate!(
    /// `SUM(...)`; filtered rows contribute 0 when FILTER is emulated
    Sum,
    AggregateFamily::Sum
);
numeric_aggregate!(
    /// `AVG(...)`
    Avg,
    AggregateFamily::Avg
);
numeric_aggregate!(
    /// `MIN(...)`
    Min,
    AggregateFamily::Min
);
numeric_aggregate!(
    /// `MAX(...)`
    Max,
    AggregateFamily::Max
);

impl Distinctable for Sum {}
impl Distinctable for Avg {}
