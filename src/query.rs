//! Per-query aggregate factory
//!
//! An [`AggregateQuery`] is bound to one dialect and one set of render
//! options. Builders come from its factory methods, are configured by the
//! caller and handed back through [`AggregateQuery::select`]; the SELECT list
//! is rendered in one pass so every item shares the parameter sequence.

use aggregate::{
    Aggregate, ArrayAgg, Avg, BitAnd, BitOr, BoolAnd, BoolOr, Count, JsonArrayAgg, JsonObjectAgg,
    Max, Min, StdDev, StringAgg, Sum, Variance,
};
use dialect::Dialect;
use serde_json::Value;
use sql_expr::{RenderOptions, SqlBuffer, ToSql};

use crate::errors::CrossAggError;
use crate::projection::SelectItem;

#[derive(Debug)]
pub struct AggregateQuery {
    dialect: Dialect,
    options: RenderOptions,
    default_separator: String,
    log_rendered_sql: bool,
    items: Vec<SelectItem>,
}

impl AggregateQuery {
    /// Query with default render options
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            options: RenderOptions::default(),
            default_separator: aggregate::AggregateExpression::DEFAULT_SEPARATOR.to_string(),
            log_rendered_sql: false,
            items: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_default_separator(mut self, separator: impl Into<String>) -> Self {
        self.default_separator = separator.into();
        self
    }

    pub fn with_sql_logging(mut self, enabled: bool) -> Self {
        self.log_rendered_sql = enabled;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn count(&self) -> Count {
        Count::new()
    }

    pub fn sum(&self) -> Sum {
        Sum::new()
    }

    pub fn avg(&self) -> Avg {
        Avg::new()
    }

    pub fn min(&self) -> Min {
        Min::new()
    }

    pub fn max(&self) -> Max {
        Max::new()
    }

    /// STRING_AGG seeded with the configured default separator
    pub fn string_agg(&self) -> StringAgg {
        StringAgg::new().separator(self.default_separator.as_str())
    }

    pub fn array_agg(&self) -> ArrayAgg {
        ArrayAgg::new()
    }

    pub fn json_array_agg(&self) -> JsonArrayAgg {
        JsonArrayAgg::new()
    }

    pub fn json_object_agg(&self) -> JsonObjectAgg {
        JsonObjectAgg::new()
    }

    pub fn bit_or(&self) -> BitOr {
        BitOr::new()
    }

    pub fn bit_and(&self) -> BitAnd {
        BitAnd::new()
    }

    pub fn bool_or(&self) -> BoolOr {
        BoolOr::new()
    }

    pub fn bool_and(&self) -> BoolAnd {
        BoolAnd::new()
    }

    pub fn stddev(&self) -> StdDev {
        StdDev::new()
    }

    pub fn variance(&self) -> Variance {
        Variance::new()
    }

    /// Append an item to the SELECT list
    pub fn select(&mut self, item: impl Into<SelectItem>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    fn buffer(&self) -> SqlBuffer {
        SqlBuffer::with_options(self.dialect, self.options)
    }

    /// Render a single aggregate with this query's dialect and options
    pub fn render(&self, aggregate: &dyn Aggregate) -> Result<(String, Vec<Value>), CrossAggError> {
        let mut buf = self.buffer();
        aggregate.render(&mut buf)?;
        let (sql, params) = buf.into_parts();

        aggregate::debug_log!("[AGGREGATE] {} -> {}", self.dialect, sql);
        if self.log_rendered_sql {
            tracing::debug!(dialect = %self.dialect, params = params.len(), "{}", sql);
        }
        Ok((sql, params))
    }

    /// Render the SELECT list (without the `SELECT` keyword).
    ///
    /// Any failing item fails the whole projection.
    pub fn build_select_clause(&self) -> Result<(String, Vec<Value>), CrossAggError> {
        let mut buf = self.buffer();
        if self.items.is_empty() {
            buf.push_char('*');
        } else {
            buf.push_list(self.items.as_slice(), ", ")?;
        }
        let (sql, params) = buf.into_parts();

        aggregate::debug_log!(
            "[PROJECTION] {} item(s) for {}: {}",
            self.items.len(),
            self.dialect,
            sql
        );
        if self.log_rendered_sql {
            tracing::debug!(dialect = %self.dialect, params = params.len(), "{}", sql);
        }
        Ok((sql, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aggregate::{Distinctable, Orderable};
    use serde_json::json;
    use sql_expr::expression::raw;
    use sql_expr::{QueryFilter, RenderError};

    #[test]
    fn test_factories_seed_function_names() {
        let query = AggregateQuery::new(Dialect::Postgres);
        assert_eq!(query.count().expression().function_name, "COUNT");
        assert_eq!(query.json_object_agg().expression().function_name, "JSON_OBJECT_AGG");
        assert_eq!(query.bool_and().expression().function_name, "BOOL_AND");
        assert_eq!(query.variance().expression().function_name, "VARIANCE");
    }

    #[test]
    fn test_string_agg_uses_default_separator() {
        let query = AggregateQuery::new(Dialect::Postgres).with_default_separator("; ");
        let (sql, _) = query.render(&query.string_agg().column("title")).unwrap();
        assert_eq!(sql, "STRING_AGG(title, '; ')");

        let (sql, _) = query
            .render(&query.string_agg().column("title").separator("|"))
            .unwrap();
        assert_eq!(sql, "STRING_AGG(title, '|')");
    }

    #[test]
    fn test_build_select_clause() {
        let mut query = AggregateQuery::new(Dialect::Postgres);
        query.select(SelectItem::field("author_id"));
        query.select(
            query
                .count()
                .all()
                .filter_where(QueryFilter::eq("status", json!("published")))
                .alias("published_posts"),
        );
        query.select(
            query
                .sum()
                .column("view_count")
                .filter(sql_expr::expression::expr("created_at > ?", vec![json!("2024-01-01")]))
                .alias("recent_views"),
        );

        let (sql, params) = query.build_select_clause().unwrap();
        assert_eq!(
            sql,
            "author_id, COUNT(*) FILTER (WHERE status = $1) AS published_posts, \
             SUM(view_count) FILTER (WHERE created_at > $2) AS recent_views"
        );
        assert_eq!(params, vec![json!("published"), json!("2024-01-01")]);
    }

    #[test]
    fn test_build_select_clause_mysql_emulation() {
        let mut query = AggregateQuery::new(Dialect::MySql);
        query.select(query.count().all().filter(raw("status = 'published'")).alias("published"));
        query.select(query.array_agg().column("title").distinct().order_by(["view_count"]));

        let (sql, _) = query.build_select_clause().unwrap();
        assert_eq!(
            sql,
            "SUM(CASE WHEN status = 'published' THEN 1 ELSE 0 END) AS published, JSON_ARRAYAGG(title)"
        );
    }

    #[test]
    fn test_empty_projection_selects_all() {
        let query = AggregateQuery::new(Dialect::Sqlite);
        assert_eq!(query.build_select_clause().unwrap().0, "*");
    }

    #[test]
    fn test_one_failure_fails_projection() {
        let mut query = AggregateQuery::new(Dialect::Sqlite);
        query.select(query.count().all());
        query.select(query.stddev().column("score"));

        assert!(matches!(
            query.build_select_clause(),
            Err(CrossAggError::Render(RenderError::AggregateUnsupportedFunction { .. }))
        ));
    }

    #[test]
    fn test_forced_filter_emulation() {
        let query = AggregateQuery::new(Dialect::Postgres).with_options(RenderOptions {
            force_filter_emulation: true,
            ..RenderOptions::default()
        });
        let (sql, _) = query.render(&query.count().all().filter(raw("active"))).unwrap();
        assert_eq!(sql, "SUM(CASE WHEN active THEN 1 ELSE 0 END)");
    }
}
