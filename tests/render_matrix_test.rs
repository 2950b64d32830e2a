//! Cross-dialect rendering scenarios
//!
//! Exercises every aggregate family against every dialect through the
//! public API, checking the rewrite table and the FILTER emulation rules.

use crossagg::prelude::*;

const CORE_DIALECTS: [Dialect; 3] = [Dialect::Postgres, Dialect::MySql, Dialect::Sqlite];

fn boxed(aggregate: impl Aggregate + 'static) -> Box<dyn Aggregate> {
    Box::new(aggregate)
}

/// One configured builder per family, boxed for table-driven checks
fn all_families() -> Vec<(&'static str, Box<dyn Aggregate>)> {
    vec![
        ("COUNT", boxed(Count::new().column("id"))),
        ("SUM", boxed(Sum::new().column("view_count"))),
        ("AVG", boxed(Avg::new().column("view_count"))),
        ("MIN", boxed(Min::new().column("view_count"))),
        ("MAX", boxed(Max::new().column("view_count"))),
        ("STRING_AGG", boxed(StringAgg::new().column("title"))),
        ("ARRAY_AGG", boxed(ArrayAgg::new().column("title"))),
        ("JSON_ARRAY_AGG", boxed(JsonArrayAgg::new().column("title"))),
        (
            "JSON_OBJECT_AGG",
            boxed(JsonObjectAgg::new().key("title").column("view_count")),
        ),
        ("BIT_OR", boxed(BitOr::new().column("flags"))),
        ("BIT_AND", boxed(BitAnd::new().column("flags"))),
        ("BOOL_OR", boxed(BoolOr::new().column("active"))),
        ("BOOL_AND", boxed(BoolAnd::new().column("active"))),
        ("STDDEV", boxed(StdDev::new().column("view_count"))),
        ("VARIANCE", boxed(Variance::new().column("view_count"))),
    ]
}

#[test]
fn test_no_filter_never_emulates() {
    for (name, aggregate) in all_families() {
        for dialect in Dialect::ALL {
            if let Ok((sql, _)) = aggregate.to_sql(dialect) {
                // BIT_*/BOOL_* fold a CASE flag where the engine lacks them
                let flag_rewrite = name.starts_with("BIT_") || name.starts_with("BOOL_");
                assert!(
                    flag_rewrite || !sql.contains("CASE WHEN"),
                    "{} on {} rendered an emulation: {}",
                    name,
                    dialect,
                    sql
                );
                assert!(!sql.contains("ELSE NULL"), "{} on {}: {}", name, dialect, sql);
                assert!(!sql.contains("FILTER"), "{} on {}: {}", name, dialect, sql);
            }
        }
    }
}

#[test]
fn test_every_family_renders_on_postgres_and_mysql() {
    for (name, aggregate) in all_families() {
        for dialect in [Dialect::Postgres, Dialect::MySql] {
            assert!(
                aggregate.to_sql(dialect).is_ok(),
                "{} failed on {}",
                name,
                dialect
            );
        }
    }
}

#[test]
fn test_sqlite_support_matrix() {
    for (name, aggregate) in all_families() {
        let result = aggregate.to_sql(Dialect::Sqlite);
        if name == "STDDEV" || name == "VARIANCE" {
            assert!(matches!(
                result,
                Err(RenderError::AggregateUnsupportedFunction {
                    dialect: Dialect::Sqlite,
                    ..
                })
            ));
        } else {
            assert!(result.is_ok(), "{} failed on SQLite", name);
        }
    }
}

#[test]
fn test_generic_families_render_everywhere() {
    for (name, aggregate) in all_families().into_iter().take(5) {
        for dialect in [Dialect::Oracle, Dialect::SqlServer] {
            let (sql, _) = aggregate.to_sql(dialect).unwrap();
            assert!(sql.starts_with(name), "{} on {}: {}", name, dialect, sql);
        }
    }
}

#[test]
fn test_dialect_specific_families_unsupported_on_oracle() {
    for (name, aggregate) in all_families().into_iter().skip(5) {
        assert!(
            matches!(
                aggregate.to_sql(Dialect::Oracle),
                Err(RenderError::DialectUnsupportedOperation {
                    dialect: Dialect::Oracle,
                    ..
                })
            ),
            "{} should be unsupported on Oracle",
            name
        );
    }
}

#[test]
fn test_count_filter_mysql() {
    let count = Count::new().all().filter(raw("status = 'published'"));
    let (sql, _) = count.to_sql(Dialect::MySql).unwrap();
    assert_eq!(sql, "SUM(CASE WHEN status = 'published' THEN 1 ELSE 0 END)");
    assert!(!sql.starts_with("COUNT(CASE WHEN"));
}

#[test]
fn test_else_branches_per_family() {
    let predicate = || raw("status = 'published'");
    let cases: Vec<(Box<dyn Aggregate>, &str)> = vec![
        (boxed(Sum::new().column("view_count").filter(predicate())), "ELSE 0 END"),
        (boxed(Avg::new().column("view_count").filter(predicate())), "ELSE NULL END"),
        (boxed(Min::new().column("view_count").filter(predicate())), "ELSE NULL END"),
        (boxed(Max::new().column("view_count").filter(predicate())), "ELSE NULL END"),
        (boxed(StringAgg::new().column("title").filter(predicate())), "ELSE NULL END"),
        (boxed(ArrayAgg::new().column("title").filter(predicate())), "ELSE NULL END"),
        (boxed(JsonArrayAgg::new().column("title").filter(predicate())), "ELSE NULL END"),
        (
            boxed(
                JsonObjectAgg::new()
                    .key("title")
                    .column("view_count")
                    .filter(predicate()),
            ),
            "ELSE NULL END",
        ),
    ];

    for (aggregate, expected) in cases {
        let (sql, _) = aggregate.to_sql(Dialect::MySql).unwrap();
        assert!(sql.contains(expected), "{}", sql);
    }
}

#[test]
fn test_filter_native_on_postgres_and_sqlite() {
    for dialect in [Dialect::Postgres, Dialect::Sqlite] {
        let (sql, _) = Max::new()
            .column("view_count")
            .filter(raw("active"))
            .to_sql(dialect)
            .unwrap();
        assert_eq!(sql, "MAX(view_count) FILTER (WHERE active)");
    }
}

#[test]
fn test_render_is_idempotent() {
    for (name, aggregate) in all_families() {
        for dialect in CORE_DIALECTS {
            assert_eq!(
                aggregate.to_sql(dialect),
                aggregate.to_sql(dialect),
                "{} on {}",
                name,
                dialect
            );
        }
    }

    let agg = StringAgg::new()
        .column("title")
        .ignore_nulls()
        .distinct()
        .order_by(["title"])
        .filter_where(QueryFilter::gt("view_count", json!(10)));
    let before = agg.expression().clone();
    let first = agg.to_sql(Dialect::MySql).unwrap();
    let second = agg.to_sql(Dialect::MySql).unwrap();
    assert_eq!(first, second);
    assert_eq!(agg.expression(), &before);
}

#[test]
fn test_concurrent_renders_of_shared_builder() {
    let agg = std::sync::Arc::new(
        Count::new()
            .column("author_id")
            .distinct()
            .filter_where(QueryFilter::eq("status", json!("published"))),
    );

    let handles: Vec<_> = CORE_DIALECTS
        .into_iter()
        .map(|dialect| {
            let agg = agg.clone();
            std::thread::spawn(move || agg.to_sql(dialect).unwrap().0)
        })
        .collect();
    let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(
        rendered,
        vec![
            "COUNT(DISTINCT author_id) FILTER (WHERE status = $1)".to_string(),
            "COUNT(DISTINCT CASE WHEN status = ? THEN author_id ELSE NULL END)".to_string(),
            "COUNT(DISTINCT author_id) FILTER (WHERE status = ?)".to_string(),
        ]
    );
}

#[test]
fn test_blog_statistics_scenarios() {
    assert_eq!(
        Sum::new().column("view_count").to_sql(Dialect::Postgres).unwrap().0,
        "SUM(view_count)"
    );
    assert_eq!(
        ArrayAgg::new()
            .column("title")
            .order_by(["view_count"])
            .to_sql(Dialect::MySql)
            .unwrap()
            .0,
        "JSON_ARRAYAGG(title)"
    );
    assert_eq!(
        BitOr::new().column("flags").to_sql(Dialect::Sqlite).unwrap().0,
        "MAX(CASE WHEN flags != 0 THEN 1 ELSE 0 END)"
    );
    assert_eq!(
        StringAgg::new().column("title").distinct().to_sql(Dialect::Sqlite).unwrap().0,
        "GROUP_CONCAT(DISTINCT title)"
    );
}

#[test]
fn test_projection_shares_parameter_sequence() {
    for (dialect, expected) in [
        (
            Dialect::Postgres,
            "COUNT(*) FILTER (WHERE status = $1) AS published, \
             AVG(view_count) FILTER (WHERE author_id IN ($2, $3)) AS avg_views",
        ),
        (
            Dialect::Oracle,
            "SUM(CASE WHEN status = :1 THEN 1 ELSE 0 END) AS published, \
             AVG(CASE WHEN author_id IN (:2, :3) THEN view_count ELSE NULL END) AS avg_views",
        ),
    ] {
        let mut query = CrossAgg::with_dialect(dialect).query();
        query.select(
            query
                .count()
                .all()
                .filter_where(QueryFilter::eq("status", json!("published")))
                .alias("published"),
        );
        query.select(
            query
                .avg()
                .column("view_count")
                .filter_where(QueryFilter::in_values("author_id", vec![json!(1), json!(2)]))
                .alias("avg_views"),
        );

        let (sql, params) = query.build_select_clause().unwrap();
        assert_eq!(sql, expected);
        assert_eq!(params, vec![json!("published"), json!(1), json!(2)]);
    }
}

#[test]
fn test_config_driven_query() {
    let config = AppConfig::from_toml_str(
        r#"
        [dialect]
        name = "mariadb"

        [render]
        default_separator = " | "
        "#,
    )
    .unwrap();
    let crossagg = CrossAgg::new(config).unwrap();
    let query = crossagg.query();

    let (sql, _) = query.render(&query.string_agg().column("title")).unwrap();
    assert_eq!(sql, "GROUP_CONCAT(title SEPARATOR ' | ')");
}
