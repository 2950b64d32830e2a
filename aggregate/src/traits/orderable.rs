//! Ordering capability

use sql_expr::{Expression, OrderTerm};

use super::base::Aggregate;

/// Builders whose function accepts an `ORDER BY` list.
///
/// Terms are emitted in the order they were added.
pub trait Orderable: Aggregate {
    /// Append ascending terms
    fn order_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        Self: Sized,
    {
        self.expression_mut()
            .order_by
            .extend(columns.into_iter().map(OrderTerm::asc));
        self
    }

    /// Append descending terms
    fn order_by_desc<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        Self: Sized,
    {
        self.expression_mut()
            .order_by
            .extend(columns.into_iter().map(OrderTerm::desc));
        self
    }

    /// Append a raw expression term, emitted as given
    fn order_by_expr(mut self, expression: impl Into<Expression>) -> Self
    where
        Self: Sized,
    {
        self.expression_mut()
            .order_by
            .push(OrderTerm::expr(expression.into()));
        self
    }

    /// Append a fully specified term, e.g. with `NULLS LAST`
    fn order_by_term(mut self, term: OrderTerm) -> Self
    where
        Self: Sized,
    {
        self.expression_mut().order_by.push(term);
        self
    }
}
