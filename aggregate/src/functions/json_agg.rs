//! JSON_ARRAY_AGG and JSON_OBJECT_AGG

use dialect::{Dialect, DialectHandlers};
use sql_expr::{Expression, RenderError};

use crate::expression::{AggregateExpression, AggregateFamily, RenderPlan};
use crate::traits::{Aggregate, Distinctable, Orderable};

/// Collect values into a JSON array.
///
/// Postgres renders `JSON_AGG` and keeps `DISTINCT`/`ORDER BY`; MySQL
/// (`JSON_ARRAYAGG`) and SQLite (`JSON_GROUP_ARRAY`) drop both.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonArrayAgg {
    expression: AggregateExpression,
}

impl JsonArrayAgg {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::JsonArrayAgg),
        }
    }
}

impl Default for JsonArrayAgg {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for JsonArrayAgg {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        DialectHandlers::new("JSON_ARRAY_AGG")
            .postgres(|mut plan: RenderPlan| -> Result<RenderPlan, RenderError> {
                plan.function_name = "JSON_AGG".to_string();
                Ok(plan)
            })
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

impl Distinctable for JsonArrayAgg {}
impl Orderable for JsonArrayAgg {}

/// Collect key/value pairs into a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct JsonObjectAgg {
    expression: AggregateExpression,
    key: Option<Expression>,
}

impl JsonObjectAgg {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::JsonObjectAgg),
            key: None,
        }
    }

    /// Column providing the object keys
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.key = Some(Expression::column(name));
        self
    }

    pub fn key_expr(mut self, expression: impl Into<Expression>) -> Self {
        self.key = Some(expression.into());
        self
    }
}

impl Default for JsonObjectAgg {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for JsonObjectAgg {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, mut plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        let key = self
            .key
            .clone()
            .ok_or_else(|| RenderError::missing_arguments(&self.expression.function_name))?;
        plan.leading_args.push(key);

        DialectHandlers::new("JSON_OBJECT_AGG")
            .postgres(|plan: RenderPlan| -> Result<RenderPlan, RenderError> { Ok(plan) })
            .mysql(|mut plan: RenderPlan| {
                plan.function_name = "JSON_OBJECTAGG".to_string();
                Ok(plan)
            })
            .sqlite(|mut plan: RenderPlan| {
                plan.function_name = "JSON_GROUP_OBJECT".to_string();
                Ok(plan)
            })
            .try_exec(dialect, plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sql_expr::expression::{raw, text};
    use sql_expr::{RenderOptions, SqlBuffer};

    #[test]
    fn test_json_array_agg_per_dialect() {
        let agg = JsonArrayAgg::new().column("title").distinct().order_by_desc(["created_at"]);
        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "JSON_AGG(DISTINCT title ORDER BY created_at DESC)"
        );
        assert_eq!(agg.to_sql(Dialect::MySql).unwrap().0, "JSON_ARRAYAGG(title)");
        assert_eq!(agg.to_sql(Dialect::Sqlite).unwrap().0, "JSON_GROUP_ARRAY(title)");
    }

    #[test]
    fn test_json_object_agg_per_dialect() {
        let agg = JsonObjectAgg::new().key("name").column("value");
        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "JSON_OBJECT_AGG(name, value)"
        );
        assert_eq!(agg.to_sql(Dialect::MySql).unwrap().0, "JSON_OBJECTAGG(name, value)");
        assert_eq!(
            agg.to_sql(Dialect::Sqlite).unwrap().0,
            "JSON_GROUP_OBJECT(name, value)"
        );
    }

    #[test]
    fn test_json_object_agg_key_expression() {
        let agg = JsonObjectAgg::new()
            .key_expr(raw("LOWER(name)"))
            .expr(text("x"));
        assert_eq!(
            agg.to_sql(Dialect::Postgres).unwrap().0,
            "JSON_OBJECT_AGG(LOWER(name), 'x')"
        );
    }

    #[test]
    fn test_json_object_agg_requires_key_and_value() {
        let missing = RenderError::MissingArguments {
            function: "JSON_OBJECT_AGG".to_string(),
        };
        assert_eq!(
            JsonObjectAgg::new().column("value").to_sql(Dialect::Postgres).unwrap_err(),
            missing
        );
        assert_eq!(
            JsonObjectAgg::new().key("name").to_sql(Dialect::Postgres).unwrap_err(),
            missing
        );
    }

    #[test]
    fn test_strict_identifiers_accept_qualified_keyword_key() {
        let mut buf = SqlBuffer::with_options(
            Dialect::Postgres,
            RenderOptions {
                strict_identifiers: true,
                ..RenderOptions::default()
            },
        );
        JsonObjectAgg::new()
            .key("settings.key")
            .column("settings.value")
            .render(&mut buf)
            .unwrap();
        assert_eq!(buf.sql(), "JSON_OBJECT_AGG(settings.key, settings.value)");

        let mut buf = SqlBuffer::with_options(
            Dialect::MySql,
            RenderOptions {
                strict_identifiers: true,
                ..RenderOptions::default()
            },
        );
        assert!(matches!(
            JsonObjectAgg::new().key("key").column("value").render(&mut buf),
            Err(RenderError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_json_filter_emulation() {
        let agg = JsonObjectAgg::new().key("name").column("value").filter(raw("active"));
        assert_eq!(
            agg.to_sql(Dialect::Sqlite).unwrap().0,
            "JSON_GROUP_OBJECT(name, value) FILTER (WHERE active)"
        );
        assert_eq!(
            agg.to_sql(Dialect::MySql).unwrap().0,
            "JSON_OBJECTAGG(name, CASE WHEN active THEN value ELSE NULL END)"
        );

        let agg = JsonArrayAgg::new().column("title").filter(raw("published"));
        assert_eq!(
            agg.to_sql(Dialect::MySql).unwrap().0,
            "JSON_ARRAYAGG(CASE WHEN published THEN title ELSE NULL END)"
        );
    }
}
