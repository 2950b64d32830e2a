use crossagg::prelude::*;

fn boxed(aggregate: impl Aggregate + 'static) -> Box<dyn Aggregate> {
    Box::new(aggregate)
}

fn main() -> anyhow::Result<()> {
    println!("🚀 CrossAgg Demo\n");

    // Load crossagg.toml when present, otherwise target PostgreSQL
    let crossagg = CrossAgg::load().unwrap_or_else(|e| {
        println!("ℹ️  No configuration loaded ({}), using PostgreSQL defaults\n", e);
        CrossAgg::with_dialect(Dialect::Postgres)
    });

    println!("📊 Blog statistics per author ({})", crossagg.dialect());
    let mut query = crossagg.query();
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
            .string_agg()
            .column("title")
            .ignore_nulls()
            .order_by_desc(["view_count"])
            .alias("titles"),
    );
    query.select(query.stddev().column("view_count").sample().alias("view_spread"));

    let (sql, params) = query.build_select_clause()?;
    println!("   SELECT {} FROM posts GROUP BY author_id", sql);
    println!("   params: {:?}\n", params);

    println!("🔀 The same aggregates on every dialect");
    let aggregates: Vec<(&str, Box<dyn Aggregate>)> = vec![
        (
            "count published",
            boxed(Count::new().all().filter(raw("status = 'published'"))),
        ),
        (
            "sum filtered",
            boxed(Sum::new().column("view_count").filter(raw("active"))),
        ),
        (
            "titles",
            boxed(StringAgg::new().column("title").separator(", ").distinct()),
        ),
        (
            "ids",
            boxed(ArrayAgg::new().column("id").order_by(["created_at"])),
        ),
        ("any flag", boxed(BitOr::new().column("flags"))),
        ("variance", boxed(Variance::new().column("score"))),
    ];

    for (label, aggregate) in &aggregates {
        println!("   {}:", label);
        for dialect in [Dialect::Postgres, Dialect::MySql, Dialect::Sqlite] {
            match aggregate.to_sql(dialect) {
                Ok((sql, _)) => println!("     {:<9} {}", dialect.name(), sql),
                Err(e) => println!("     {:<9} ❌ {}", dialect.name(), e),
            }
        }
    }

    println!("\n✅ Demo complete");
    Ok(())
}
