//! SQL generation for conditions and ordering terms
//!
//! Everything here writes into a [`SqlBuffer`], so placeholders and
//! dialect-specific rewrites follow the buffer's active dialect.

use serde_json::Value;

use crate::buffer::{SqlBuffer, ToSql};
use crate::errors::RenderError;
use crate::query_builder::filter::{Comparison, QueryFilter};
use crate::query_builder::ordering::{NullsOrder, OrderTerm};

pub struct SqlGenerator;

impl SqlGenerator {
    /// Render a predicate tree
    pub fn build_condition_sql(filter: &QueryFilter, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        match filter {
            QueryFilter::Compare {
                column,
                comparison,
                value,
            } => Self::build_comparison(column, *comparison, value, buf),
            QueryFilter::Between { column, low, high } => {
                buf.push_identifier(column)?;
                buf.push_str(" BETWEEN ");
                buf.push_param(low.clone());
                buf.push_str(" AND ");
                buf.push_param(high.clone());
                Ok(())
            }
            QueryFilter::InList {
                column,
                values,
                negated,
            } => {
                if values.is_empty() {
                    buf.push_str(if *negated { "1=1" } else { "1=0" });
                    return Ok(());
                }
                buf.push_identifier(column)?;
                buf.push_str(if *negated { " NOT IN (" } else { " IN (" });
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    buf.push_param(value.clone());
                }
                buf.push_char(')');
                Ok(())
            }
            QueryFilter::IsNull { column, negated } => Self::build_null_check(column, *negated, buf),
            QueryFilter::Not(inner) => {
                buf.push_str("NOT (");
                Self::build_condition_sql(inner, buf)?;
                buf.push_char(')');
                Ok(())
            }
            QueryFilter::All(filters) => Self::build_group(filters, " AND ", "1=1", buf),
            QueryFilter::Any(filters) => Self::build_group(filters, " OR ", "1=0", buf),
        }
    }

    fn build_group(
        filters: &[QueryFilter],
        joiner: &str,
        when_empty: &str,
        buf: &mut SqlBuffer,
    ) -> Result<(), RenderError> {
        if filters.is_empty() {
            buf.push_str(when_empty);
            return Ok(());
        }

        buf.push_char('(');
        for (i, filter) in filters.iter().enumerate() {
            if i > 0 {
                buf.push_str(joiner);
            }
            Self::build_condition_sql(filter, buf)?;
        }
        buf.push_char(')');
        Ok(())
    }

    fn build_comparison(
        column: &str,
        comparison: Comparison,
        value: &Value,
        buf: &mut SqlBuffer,
    ) -> Result<(), RenderError> {
        match (comparison, value) {
            (Comparison::Eq, Value::Null) => return Self::build_null_check(column, false, buf),
            (Comparison::Ne, Value::Null) => return Self::build_null_check(column, true, buf),
            _ => {}
        }

        if comparison == Comparison::ILike && !buf.dialect().supports_ilike() {
            buf.push_str("LOWER(");
            buf.push_identifier(column)?;
            buf.push_str(") LIKE LOWER(");
            buf.push_param(value.clone());
            buf.push_char(')');
            return Ok(());
        }

        buf.push_identifier(column)?;
        buf.push_char(' ').push_str(comparison.as_sql()).push_char(' ');
        buf.push_param(value.clone());
        Ok(())
    }

    fn build_null_check(column: &str, negated: bool, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        buf.push_identifier(column)?;
        buf.push_str(if negated { " IS NOT NULL" } else { " IS NULL" });
        Ok(())
    }

    /// Render `ORDER BY ...` for an aggregate's ordering terms
    pub fn build_order_clause(terms: &[OrderTerm], buf: &mut SqlBuffer) -> Result<(), RenderError> {
        if terms.is_empty() {
            return Ok(());
        }

        buf.push_str("ORDER BY ");
        let native_nulls = buf.dialect().supports_nulls_ordering();

        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }

            // Engines without NULLS FIRST/LAST get a leading null-indicator sort key
            if let (Some(nulls), false) = (term.nulls, native_nulls) {
                buf.push_str("CASE WHEN ");
                term.target.to_sql(buf)?;
                buf.push_str(" IS NULL THEN 1 ELSE 0 END ");
                buf.push_str(match nulls {
                    NullsOrder::First => "DESC",
                    NullsOrder::Last => "ASC",
                });
                buf.push_str(", ");
            }

            term.target.to_sql(buf)?;
            if let Some(order) = term.order {
                buf.push_char(' ').push_str(order.to_sql());
            }
            if let (Some(nulls), true) = (term.nulls, native_nulls) {
                buf.push_char(' ').push_str(nulls.to_sql());
            }
        }

        Ok(())
    }
}

impl ToSql for QueryFilter {
    fn to_sql(&self, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        SqlGenerator::build_condition_sql(self, buf)
    }
}
