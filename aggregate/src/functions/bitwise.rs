//! BIT_OR and BIT_AND
//!
//! Native on Postgres and MySQL. SQLite has no bitwise aggregates; there
//! the value is reduced to a 0/1 flag and folded with `MAX` (or) or `MIN`
//! (and).

use dialect::{Dialect, DialectHandlers};
use sql_expr::expression::{case, raw};
use sql_expr::{Expression, RenderError};

use crate::expression::{AggregateExpression, AggregateFamily, RenderPlan};
use crate::traits::Aggregate;

/// `CASE WHEN arg != 0 THEN 1 ELSE 0 END`
fn nonzero_flag(argument: Expression) -> Expression {
    case()
        .when(Expression::binary(argument, "!=", raw("0")), raw("1"))
        .otherwise(raw("0"))
        .into()
}

fn rewrite_bitwise(
    operation: &'static str,
    sqlite_fold: &'static str,
    plan: RenderPlan,
    dialect: Dialect,
) -> Result<RenderPlan, RenderError> {
    DialectHandlers::new(operation)
        .postgres(|plan: RenderPlan| -> Result<RenderPlan, RenderError> { Ok(plan) })
        .mysql(|plan: RenderPlan| Ok(plan))
        .sqlite(|mut plan: RenderPlan| {
            plan.function_name = sqlite_fold.to_string();
            plan.argument = nonzero_flag(plan.argument);
            Ok(plan)
        })
        .try_exec(dialect, plan)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BitOr {
    expression: AggregateExpression,
}

impl BitOr {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::BitOr),
        }
    }
}

impl Default for BitOr {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for BitOr {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        rewrite_bitwise("BIT_OR", "MAX", plan, dialect)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BitAnd {
    expression: AggregateExpression,
}

impl BitAnd {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::BitAnd),
        }
    }
}

impl Default for BitAnd {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for BitAnd {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        rewrite_bitwise("BIT_AND", "MIN", plan, dialect)
    }
}
