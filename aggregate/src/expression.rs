//! Aggregate expression core
//!
//! [`AggregateExpression`] holds everything a builder has been configured
//! with. Rendering never touches it: each render derives a [`RenderPlan`],
//! lets the builder rewrite that plan for the active dialect and then emits
//! either the native form or the FILTER emulation.

use sql_expr::expression::{case, raw};
use sql_expr::{Expression, OrderTerm, RenderError, SqlBuffer, SqlGenerator, ToSql};

/// Aggregate families known to the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFamily {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    StringAgg,
    ArrayAgg,
    JsonArrayAgg,
    JsonObjectAgg,
    BitOr,
    BitAnd,
    BoolOr,
    BoolAnd,
    StdDev,
    Variance,
}

impl AggregateFamily {
    /// Function name the builder starts from before any dialect rewrite
    pub fn function_name(&self) -> &'static str {
        match self {
            AggregateFamily::Count => "COUNT",
            AggregateFamily::Sum => "SUM",
            AggregateFamily::Avg => "AVG",
            AggregateFamily::Min => "MIN",
            AggregateFamily::Max => "MAX",
            AggregateFamily::StringAgg => "STRING_AGG",
            AggregateFamily::ArrayAgg => "ARRAY_AGG",
            AggregateFamily::JsonArrayAgg => "JSON_ARRAY_AGG",
            AggregateFamily::JsonObjectAgg => "JSON_OBJECT_AGG",
            AggregateFamily::BitOr => "BIT_OR",
            AggregateFamily::BitAnd => "BIT_AND",
            AggregateFamily::BoolOr => "BOOL_OR",
            AggregateFamily::BoolAnd => "BOOL_AND",
            AggregateFamily::StdDev => "STDDEV",
            AggregateFamily::Variance => "VARIANCE",
        }
    }

    /// How `FILTER (WHERE ...)` is rewritten where the clause is unavailable
    pub fn filter_emulation(&self) -> FilterEmulation {
        match self {
            AggregateFamily::Count => FilterEmulation::CountOnes,
            AggregateFamily::Sum => FilterEmulation::SumZero,
            _ => FilterEmulation::NullElse,
        }
    }
}

/// FILTER emulation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEmulation {
    /// `SUM(CASE WHEN f THEN 1 ELSE 0 END)`
    CountOnes,
    /// `SUM(CASE WHEN f THEN x ELSE 0 END)`
    SumZero,
    /// `FUNC(CASE WHEN f THEN x ELSE NULL END)`
    NullElse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullsMode {
    #[default]
    Default,
    Ignore,
    Respect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatisticalMode {
    /// Dialect default
    #[default]
    Default,
    Population,
    Sample,
}

/// Configured state of an aggregate builder
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpression {
    pub function_name: String,
    pub family: AggregateFamily,
    pub argument: Option<Expression>,
    pub distinct: bool,
    pub filter: Option<Expression>,
    pub order_by: Vec<OrderTerm>,
    pub nulls_mode: NullsMode,
    pub separator: String,
    pub statistical_mode: StatisticalMode,
    pub alias: Option<String>,
}

impl AggregateExpression {
    pub const DEFAULT_SEPARATOR: &'static str = ",";

    pub fn new(family: AggregateFamily) -> Self {
        Self {
            function_name: family.function_name().to_string(),
            family,
            argument: None,
            distinct: false,
            filter: None,
            order_by: Vec::new(),
            nulls_mode: NullsMode::Default,
            separator: Self::DEFAULT_SEPARATOR.to_string(),
            statistical_mode: StatisticalMode::Default,
            alias: None,
        }
    }

    /// Derive the dialect-neutral render plan
    pub fn plan(&self) -> Result<RenderPlan, RenderError> {
        let argument = self
            .argument
            .clone()
            .ok_or_else(|| RenderError::missing_arguments(&self.function_name))?;

        Ok(RenderPlan {
            function_name: self.function_name.clone(),
            emulation: self.family.filter_emulation(),
            leading_args: Vec::new(),
            argument,
            trailing_args: Vec::new(),
            distinct: self.distinct,
            order_by: self.order_by.clone(),
            separator_keyword: None,
            nulls_mode: self.nulls_mode,
            filter: self.filter.clone(),
        })
    }
}

/// A derived, dialect-specialised copy of an [`AggregateExpression`]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub function_name: String,
    pub emulation: FilterEmulation,
    /// Arguments before the main argument (JSON object keys)
    pub leading_args: Vec<Expression>,
    pub argument: Expression,
    /// Arguments after the main argument (separators)
    pub trailing_args: Vec<Expression>,
    pub distinct: bool,
    pub order_by: Vec<OrderTerm>,
    /// MySQL style `SEPARATOR '...'` inside the call
    pub separator_keyword: Option<String>,
    pub nulls_mode: NullsMode,
    pub filter: Option<Expression>,
}

impl RenderPlan {
    /// Turn `ignore_nulls()` into an argument guard and drop the mode
    pub fn apply_null_handling(&mut self) {
        if self.nulls_mode == NullsMode::Ignore {
            let guarded = self.argument.clone().when_not_null();
            // Under DISTINCT every ORDER BY target must appear in the argument list
            if self.distinct {
                for term in &mut self.order_by {
                    if term.target == self.argument {
                        term.target = guarded.clone();
                    }
                }
            }
            self.argument = guarded;
        }
        self.nulls_mode = NullsMode::Default;
    }

    /// Remove clauses the target function cannot express
    pub fn strip_distinct_and_order(&mut self) {
        self.distinct = false;
        self.order_by.clear();
    }

    pub fn render(&self, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        match &self.filter {
            Some(filter) if !buf.native_filter() => self.render_emulated(filter, buf),
            Some(filter) => {
                self.render_call(&self.argument, self.distinct, buf)?;
                buf.push_str(" FILTER (WHERE ");
                filter.to_sql(buf)?;
                buf.push_char(')');
                Ok(())
            }
            None => self.render_call(&self.argument, self.distinct, buf),
        }
    }

    fn render_emulated(&self, filter: &Expression, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        crate::debug_log!(
            "[AGGREGATE] Emulating FILTER for {} on {} ({:?})",
            self.function_name,
            buf.dialect(),
            self.emulation
        );

        match self.emulation {
            FilterEmulation::CountOnes if self.distinct => {
                let guarded: Expression = case()
                    .when(filter.clone(), self.argument.clone())
                    .otherwise(raw("NULL"))
                    .into();
                self.render_call(&guarded, true, buf)
            }
            FilterEmulation::CountOnes => {
                let condition = if self.argument.is_star() {
                    filter.clone()
                } else {
                    Expression::and(vec![
                        filter.clone(),
                        Expression::is_not_null(self.argument.clone()),
                    ])
                };
                buf.push_str("SUM(");
                case()
                    .when(condition, raw("1"))
                    .otherwise(raw("0"))
                    .to_sql(buf)?;
                buf.push_char(')');
                Ok(())
            }
            FilterEmulation::SumZero => {
                let guarded: Expression = case()
                    .when(filter.clone(), self.argument.clone())
                    .otherwise(raw("0"))
                    .into();
                self.render_call(&guarded, self.distinct, buf)
            }
            FilterEmulation::NullElse => {
                let guarded: Expression = case()
                    .when(filter.clone(), self.argument.clone())
                    .otherwise(raw("NULL"))
                    .into();
                self.render_call(&guarded, self.distinct, buf)
            }
        }
    }

    /// `FUNC([DISTINCT ]args[ ORDER BY ...][ SEPARATOR '...'])[ IGNORE|RESPECT NULLS]`
    fn render_call(
        &self,
        argument: &Expression,
        distinct: bool,
        buf: &mut SqlBuffer,
    ) -> Result<(), RenderError> {
        buf.push_str(&self.function_name).push_char('(');
        if distinct {
            buf.push_str("DISTINCT ");
        }

        for arg in &self.leading_args {
            arg.to_sql(buf)?;
            buf.push_str(", ");
        }
        argument.to_sql(buf)?;
        for arg in &self.trailing_args {
            buf.push_str(", ");
            arg.to_sql(buf)?;
        }

        if !self.order_by.is_empty() {
            buf.push_char(' ');
            SqlGenerator::build_order_clause(&self.order_by, buf)?;
        }
        if let Some(separator) = &self.separator_keyword {
            buf.push_str(" SEPARATOR ");
            buf.push_quoted(separator);
        }
        buf.push_char(')');

        match self.nulls_mode {
            NullsMode::Ignore => {
                buf.push_str(" IGNORE NULLS");
            }
            NullsMode::Respect => {
                buf.push_str(" RESPECT NULLS");
            }
            NullsMode::Default => {}
        }
        Ok(())
    }
}
