//! BOOL_OR and BOOL_AND
//!
//! Only Postgres has boolean aggregates. MySQL and SQLite fold a 0/1 flag
//! with `MAX` (or) or `MIN` (and).

use dialect::{Dialect, DialectHandlers};
use sql_expr::expression::{case, raw};
use sql_expr::{Expression, RenderError};

use crate::expression::{AggregateExpression, AggregateFamily, RenderPlan};
use crate::traits::Aggregate;

/// `CASE WHEN arg THEN 1 ELSE 0 END`
fn truth_flag(argument: Expression) -> Expression {
    case().when(argument, raw("1")).otherwise(raw("0")).into()
}

fn rewrite_boolean(
    operation: &'static str,
    fold: &'static str,
    plan: RenderPlan,
    dialect: Dialect,
) -> Result<RenderPlan, RenderError> {
    let emulate = move |mut plan: RenderPlan| -> Result<RenderPlan, RenderError> {
        plan.function_name = fold.to_string();
        plan.argument = truth_flag(plan.argument);
        Ok(plan)
    };

    DialectHandlers::new(operation)
        .postgres(|plan: RenderPlan| -> Result<RenderPlan, RenderError> { Ok(plan) })
        .mysql(emulate)
        .sqlite(emulate)
        .try_exec(dialect, plan)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolOr {
    expression: AggregateExpression,
}

impl BoolOr {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::BoolOr),
        }
    }
}

impl Default for BoolOr {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for BoolOr {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        rewrite_boolean("BOOL_OR", "MAX", plan, dialect)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolAnd {
    expression: AggregateExpression,
}

impl BoolAnd {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::BoolAnd),
        }
    }
}

impl Default for BoolAnd {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for BoolAnd {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        rewrite_boolean("BOOL_AND", "MIN", plan, dialect)
    }
}
