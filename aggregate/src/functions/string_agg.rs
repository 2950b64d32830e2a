//! STRING_AGG
//!
//! | Dialect  | Rendering |
//! |----------|-----------|
//! | Postgres | `STRING_AGG(arg, 'sep' ORDER BY ...)` |
//! | MySQL    | `GROUP_CONCAT(arg ORDER BY ... SEPARATOR 'sep')` |
//! | SQLite   | `GROUP_CONCAT(arg, 'sep')`, or `GROUP_CONCAT(DISTINCT arg)` |
//!
//! SQLite's `GROUP_CONCAT` takes no ordering, and with `DISTINCT` it only
//! accepts a single argument, so the separator is dropped in that case.

use dialect::{Dialect, DialectHandlers};
use sql_expr::{Expression, RenderError};

use crate::expression::{AggregateExpression, AggregateFamily, RenderPlan};
use crate::traits::{Aggregate, Distinctable, NullHandling, Orderable};

#[derive(Debug, Clone, PartialEq)]
pub struct StringAgg {
    expression: AggregateExpression,
}

impl StringAgg {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::StringAgg),
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.expression.separator = separator.into();
        self
    }
}

impl Default for StringAgg {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for StringAgg {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, mut plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        plan.apply_null_handling();
        let separator = self.expression.separator.as_str();

        DialectHandlers::new("STRING_AGG")
            .postgres(|mut plan: RenderPlan| -> Result<RenderPlan, RenderError> {
                plan.trailing_args.push(Expression::text(separator));
                Ok(plan)
            })
            .mysql(|mut plan: RenderPlan| {
                plan.function_name = "GROUP_CONCAT".to_string();
                plan.separator_keyword = Some(separator.to_string());
                Ok(plan)
            })
            .sqlite(|mut plan: RenderPlan| {
                plan.function_name = "GROUP_CONCAT".to_string();
                plan.order_by.clear();
                if !plan.distinct {
                    plan.trailing_args.push(Expression::text(separator));
                }
                Ok(plan)
            })
            .try_exec(dialect, plan)
    }
}

impl Distinctable for StringAgg {}
impl Orderable for StringAgg {}
impl NullHandling for StringAgg {}

#[cfg(test)]
mod tests {
    use super::*;
    use sql_expr::expression::raw;
    use sql_expr::OrderTerm;

    fn titles() -> StringAgg {
        StringAgg::new().column("title")
    }

    #[test]
    fn test_default_separator_per_dialect() {
        assert_eq!(titles().to_sql(Dialect::Postgres).unwrap().0, "STRING_AGG(title, ',')");
        assert_eq!(
            titles().to_sql(Dialect::MySql).unwrap().0,
            "GROUP_CONCAT(title SEPARATOR ',')"
        );
        assert_eq!(titles().to_sql(Dialect::Sqlite).unwrap().0, "GROUP_CONCAT(title, ',')");
    }

    #[test]
    fn test_order_and_separator() {
        let agg = titles().separator(" | ").order_by_desc(["view_count"]).order_by(["title"]);

        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "STRING_AGG(title, ' | ' ORDER BY view_count DESC, title ASC)"
        );
        assert_eq!(
            agg.to_sql(Dialect::MySql).unwrap().0,
            "GROUP_CONCAT(title ORDER BY view_count DESC, title ASC SEPARATOR ' | ')"
        );
        assert_eq!(
            agg.to_sql(Dialect::Sqlite).unwrap().0,
            "GROUP_CONCAT(title, ' | ')"
        );
    }

    #[test]
    fn test_sqlite_distinct_drops_separator() {
        let agg = titles().distinct().separator(";");
        assert_eq!(agg.to_sql(Dialect::Sqlite).unwrap().0, "GROUP_CONCAT(DISTINCT title)");
        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "STRING_AGG(DISTINCT title, ';')"
        );
    }

    #[test]
    fn test_separator_escaping() {
        let agg = titles().separator("it's\\");
        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "STRING_AGG(title, 'it''s\\')"
        );
        assert_eq!(
            agg.to_sql(Dialect::MySql).unwrap().0,
            "GROUP_CONCAT(title SEPARATOR 'it''s\\\\')"
        );
    }

    #[test]
    fn test_null_handling() {
        assert_eq!(
            titles().ignore_nulls().to_sql(Dialect::Postgres).unwrap().0,
            "STRING_AGG(CASE WHEN title IS NOT NULL THEN title END, ',')"
        );
        assert_eq!(
            titles().ignore_nulls().respect_nulls().to_sql(Dialect::MySql).unwrap().0,
            "GROUP_CONCAT(title SEPARATOR ',')"
        );
    }

    #[test]
    fn test_ignore_nulls_with_distinct_order() {
        let agg = titles().distinct().order_by(["title"]).ignore_nulls();
        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "STRING_AGG(DISTINCT CASE WHEN title IS NOT NULL THEN title END, ',' \
             ORDER BY CASE WHEN title IS NOT NULL THEN title END ASC)"
        );
        assert_eq!(
            agg.to_sql(Dialect::MySql).unwrap().0,
            "GROUP_CONCAT(DISTINCT CASE WHEN title IS NOT NULL THEN title END \
             ORDER BY CASE WHEN title IS NOT NULL THEN title END ASC SEPARATOR ',')"
        );
    }

    #[test]
    fn test_nulls_ordering_emulated_on_mysql() {
        let agg = titles().order_by_term(OrderTerm::asc("rank").nulls_last());
        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "STRING_AGG(title, ',' ORDER BY rank ASC NULLS LAST)"
        );
        assert_eq!(
            agg.to_sql(Dialect::MySql).unwrap().0,
            "GROUP_CONCAT(title ORDER BY CASE WHEN rank IS NULL THEN 1 ELSE 0 END ASC, rank ASC SEPARATOR ',')"
        );
    }

    #[test]
    fn test_filter_emulation_on_mysql() {
        let agg = titles().order_by_expr(raw("LENGTH(title) DESC")).filter(raw("published"));
        assert_eq!(
            agg.to_sql(Dialect::MySql).unwrap().0,
            "GROUP_CONCAT(CASE WHEN published THEN title ELSE NULL END ORDER BY LENGTH(title) DESC SEPARATOR ',')"
        );
        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "STRING_AGG(title, ',' ORDER BY LENGTH(title) DESC) FILTER (WHERE published)"
        );
    }

    #[test]
    fn test_unsupported_dialects() {
        for dialect in [Dialect::Oracle, Dialect::SqlServer] {
            assert_eq!(
                titles().to_sql(dialect).unwrap_err(),
                RenderError::DialectUnsupportedOperation {
                    operation: "STRING_AGG".to_string(),
                    dialect,
                }
            );
        }
    }
}
