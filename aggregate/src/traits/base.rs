//! Base aggregate trait

use std::fmt;

use dialect::Dialect;
use serde_json::Value;
use sql_expr::{Expression, QueryFilter, RenderError, SqlBuffer};

use crate::expression::{AggregateExpression, RenderPlan};

/// Shared behaviour of every aggregate builder.
///
/// Setters consume and return the builder so configuration chains; rendering
/// borrows it and never changes its state.
pub trait Aggregate: fmt::Debug + Send + Sync {
    fn expression(&self) -> &AggregateExpression;

    fn expression_mut(&mut self) -> &mut AggregateExpression;

    /// Adjust the derived plan for the target dialect
    fn rewrite(&self, plan: RenderPlan, _dialect: Dialect) -> Result<RenderPlan, RenderError> {
        Ok(plan)
    }

    /// Render into a shared buffer
    fn render(&self, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        let plan = self.expression().plan()?;
        let plan = self.rewrite(plan, buf.dialect())?;
        crate::trace_log!(
            "[AGGREGATE] {} rendered as {} for {}",
            self.expression().function_name,
            plan.function_name,
            buf.dialect()
        );
        plan.render(buf)
    }

    /// Render on its own, returning the SQL text and bound parameters
    fn to_sql(&self, dialect: Dialect) -> Result<(String, Vec<Value>), RenderError> {
        let mut buf = SqlBuffer::new(dialect);
        self.render(&mut buf)?;
        Ok(buf.into_parts())
    }

    fn alias_name(&self) -> Option<&str> {
        self.expression().alias.as_deref()
    }

    /// Aggregate over a column
    fn column(mut self, name: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().argument = Some(Expression::column(name));
        self
    }

    /// Aggregate over an arbitrary expression
    fn expr(mut self, expression: impl Into<Expression>) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().argument = Some(expression.into());
        self
    }

    /// Only aggregate rows matching `predicate`
    fn filter(mut self, predicate: impl Into<Expression>) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().filter = Some(predicate.into());
        self
    }

    fn filter_where(self, filter: QueryFilter) -> Self
    where
        Self: Sized,
    {
        self.filter(filter)
    }

    /// Projection alias (`AS alias`)
    fn alias(mut self, alias: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().alias = Some(alias.into());
        self
    }
}
