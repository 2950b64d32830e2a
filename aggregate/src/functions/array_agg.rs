//! ARRAY_AGG
//!
//! Native on Postgres. MySQL and SQLite collect into a JSON array instead,
//! and their JSON aggregates take neither `DISTINCT` nor `ORDER BY`, so both
//! are dropped there.

use dialect::{Dialect, DialectHandlers};
use sql_expr::RenderError;

use crate::expression::{AggregateExpression, AggregateFamily, RenderPlan};
use crate::traits::{Aggregate, Distinctable, NullHandling, Orderable};

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAgg {
    expression: AggregateExpression,
}

impl ArrayAgg {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::ArrayAgg),
        }
    }
}

impl Default for ArrayAgg {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for ArrayAgg {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, mut plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        plan.apply_null_handling();

        DialectHandlers::new("ARRAY_AGG")
            .postgres(|plan: RenderPlan| -> Result<RenderPlan, RenderError> { Ok(plan) })
            .mysql(|mut plan: RenderPlan| {
                plan.function_name = "JSON_ARRAYAGG".to_string();
                plan.strip_distinct_and_order();
                Ok(plan)
            })
            .sqlite(|mut plan: RenderPlan| {
                plan.function_name = "JSON_GROUP_ARRAY".to_string();
                plan.strip_distinct_and_order();
                Ok(plan)
            })
            .try_exec(dialect, plan)
    }
}

impl Distinctable for ArrayAgg {}
impl Orderable for ArrayAgg {}
impl NullHandling for ArrayAgg {}
