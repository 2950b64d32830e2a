//! Expression facility
//!
//! Dialect-neutral building blocks for aggregate arguments and predicates:
//! column references, raw SQL fragments with bound parameters, tuples, CASE
//! expressions and null checks. Everything renders through [`ToSql`].

use serde_json::Value;

use crate::buffer::{SqlBuffer, ToSql};
use crate::errors::RenderError;
use crate::query_builder::filter::QueryFilter;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Column reference, optionally qualified (`posts.title`)
    Column(String),
    /// `*`
    Star,
    /// Raw SQL; each `?` outside string literals binds the next argument
    Raw { sql: String, args: Vec<Value> },
    /// Bound parameter
    Literal(Value),
    /// Inline, escaped string literal
    Text(String),
    /// Comma separated list: `a, b, c`
    Tuple(Vec<Expression>),
    Case(Box<CaseExpression>),
    IsNotNull(Box<Expression>),
    /// `left <op> right`, e.g. `flags != 0`
    Binary {
        left: Box<Expression>,
        operator: &'static str,
        right: Box<Expression>,
    },
    /// Conjunction, each operand parenthesized
    And(Vec<Expression>),
    Condition(QueryFilter),
}

impl Expression {
    pub fn column(name: impl Into<String>) -> Self {
        Expression::Column(name.into())
    }

    pub fn star() -> Self {
        Expression::Star
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Expression::Raw {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    pub fn raw_with(sql: impl Into<String>, args: Vec<Value>) -> Self {
        Expression::Raw {
            sql: sql.into(),
            args,
        }
    }

    pub fn literal(value: Value) -> Self {
        Expression::Literal(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Expression::Text(value.into())
    }

    pub fn tuple(items: Vec<Expression>) -> Self {
        Expression::Tuple(items)
    }

    pub fn is_not_null(expr: Expression) -> Self {
        Expression::IsNotNull(Box::new(expr))
    }

    pub fn binary(left: Expression, operator: &'static str, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn and(operands: Vec<Expression>) -> Self {
        Expression::And(operands)
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Expression::Star)
    }

    /// `CASE WHEN <self> IS NOT NULL THEN <self> END`
    pub fn when_not_null(self) -> Self {
        case()
            .when(Expression::is_not_null(self.clone()), self)
            .into()
    }

    fn render_raw(sql: &str, args: &[Value], buf: &mut SqlBuffer) -> Result<(), RenderError> {
        let placeholders = Self::raw_placeholders(sql).count();
        if placeholders != args.len() {
            return Err(RenderError::PlaceholderMismatch {
                sql: sql.to_string(),
                placeholders,
                args: args.len(),
            });
        }

        let mut last = 0;
        for (index, arg) in Self::raw_placeholders(sql).zip(args) {
            buf.push_str(&sql[last..index]);
            buf.push_param(arg.clone());
            last = index + 1;
        }
        buf.push_str(&sql[last..]);
        Ok(())
    }

    /// Byte offsets of `?` placeholders outside single-quoted literals
    fn raw_placeholders(sql: &str) -> impl Iterator<Item = usize> + '_ {
        let mut in_quotes = false;
        sql.char_indices().filter_map(move |(i, c)| match c {
            '\'' => {
                in_quotes = !in_quotes;
                None
            }
            '?' if !in_quotes => Some(i),
            _ => None,
        })
    }
}

impl ToSql for Expression {
    fn to_sql(&self, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        match self {
            Expression::Column(name) => {
                buf.push_identifier(name)?;
            }
            Expression::Star => {
                buf.push_char('*');
            }
            Expression::Raw { sql, args } => Self::render_raw(sql, args, buf)?,
            Expression::Literal(value) => {
                buf.push_param(value.clone());
            }
            Expression::Text(value) => {
                buf.push_quoted(value);
            }
            Expression::Tuple(items) => buf.push_list(items.as_slice(), ", ")?,
            Expression::Case(case) => case.to_sql(buf)?,
            Expression::IsNotNull(expr) => {
                expr.to_sql(buf)?;
                buf.push_str(" IS NOT NULL");
            }
            Expression::Binary {
                left,
                operator,
                right,
            } => {
                left.to_sql(buf)?;
                buf.push_char(' ').push_str(operator).push_char(' ');
                right.to_sql(buf)?;
            }
            Expression::And(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(" AND ");
                    }
                    buf.push_char('(');
                    operand.to_sql(buf)?;
                    buf.push_char(')');
                }
            }
            Expression::Condition(filter) => filter.to_sql(buf)?,
        }
        Ok(())
    }
}

impl From<QueryFilter> for Expression {
    fn from(filter: QueryFilter) -> Self {
        Expression::Condition(filter)
    }
}

/// `CASE WHEN ... THEN ... [ELSE ...] END`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseExpression {
    pub branches: Vec<(Expression, Expression)>,
    pub otherwise: Option<Expression>,
}

impl CaseExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, condition: impl Into<Expression>, result: impl Into<Expression>) -> Self {
        self.branches.push((condition.into(), result.into()));
        self
    }

    pub fn otherwise(mut self, result: impl Into<Expression>) -> Self {
        self.otherwise = Some(result.into());
        self
    }
}

impl ToSql for CaseExpression {
    fn to_sql(&self, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        if self.branches.is_empty() {
            // A CASE without branches always yields its ELSE value
            return match &self.otherwise {
                Some(result) => result.to_sql(buf),
                None => {
                    buf.push_str("NULL");
                    Ok(())
                }
            };
        }

        buf.push_str("CASE");
        for (condition, result) in &self.branches {
            buf.push_str(" WHEN ");
            condition.to_sql(buf)?;
            buf.push_str(" THEN ");
            result.to_sql(buf)?;
        }
        if let Some(result) = &self.otherwise {
            buf.push_str(" ELSE ");
            result.to_sql(buf)?;
        }
        buf.push_str(" END");
        Ok(())
    }
}

impl From<CaseExpression> for Expression {
    fn from(case: CaseExpression) -> Self {
        Expression::Case(Box::new(case))
    }
}

/// Column reference
pub fn column(name: impl Into<String>) -> Expression {
    Expression::column(name)
}

/// Raw SQL fragment without parameters
pub fn raw(sql: impl Into<String>) -> Expression {
    Expression::raw(sql)
}

/// Raw SQL fragment; `?` placeholders bind `args` in order
pub fn expr(sql: impl Into<String>, args: Vec<Value>) -> Expression {
    Expression::raw_with(sql, args)
}

/// Multi-argument tuple
pub fn exprs(items: Vec<Expression>) -> Expression {
    Expression::tuple(items)
}

pub fn case() -> CaseExpression {
    CaseExpression::new()
}

pub fn is_not_null(expr: Expression) -> Expression {
    Expression::is_not_null(expr)
}

pub fn literal(value: Value) -> Expression {
    Expression::literal(value)
}

pub fn text(value: impl Into<String>) -> Expression {
    Expression::text(value)
}
