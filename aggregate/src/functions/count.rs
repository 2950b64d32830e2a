//! COUNT

use sql_expr::Expression;

use crate::expression::{AggregateExpression, AggregateFamily};
use crate::traits::{Aggregate, Distinctable};

/// `COUNT(...)`, supported on every dialect
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    expression: AggregateExpression,
}

impl Count {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::Count),
        }
    }

    /// `COUNT(*)`
    pub fn all(mut self) -> Self {
        self.expression.argument = Some(Expression::star());
        self
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for Count {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }
}

impl Distinctable for Count {}
