//! STDDEV and VARIANCE
//!
//! | Mode       | Postgres                  | MySQL                     |
//! |------------|---------------------------|---------------------------|
//! | default    | `STDDEV_POP` / `VAR_POP`  | `STDDEV` / `VARIANCE`     |
//! | population | `STDDEV_POP` / `VAR_POP`  | `STDDEV_POP` / `VAR_POP`  |
//! | sample     | `STDDEV_SAMP` / `VAR_SAMP`| `STDDEV_SAMP` / `VAR_SAMP`|
//!
//! SQLite ships no statistical aggregates.

use dialect::{Dialect, DialectHandlers};
use sql_expr::RenderError;

use crate::expression::{AggregateExpression, AggregateFamily, RenderPlan, StatisticalMode};
use crate::traits::{Aggregate, Statistical};

/// Function names for one statistical family
struct StatisticalNames {
    operation: &'static str,
    population: &'static str,
    sample: &'static str,
}

const STDDEV: StatisticalNames = StatisticalNames {
    operation: "STDDEV",
    population: "STDDEV_POP",
    sample: "STDDEV_SAMP",
};

const VARIANCE: StatisticalNames = StatisticalNames {
    operation: "VARIANCE",
    population: "VAR_POP",
    sample: "VAR_SAMP",
};

fn rewrite_statistical(
    names: &StatisticalNames,
    mode: StatisticalMode,
    plan: RenderPlan,
    dialect: Dialect,
) -> Result<RenderPlan, RenderError> {
    DialectHandlers::new(names.operation)
        .postgres(|mut plan: RenderPlan| -> Result<RenderPlan, RenderError> {
            plan.function_name = match mode {
                StatisticalMode::Default | StatisticalMode::Population => names.population,
                StatisticalMode::Sample => names.sample,
            }
            .to_string();
            Ok(plan)
        })
        .mysql(|mut plan: RenderPlan| {
            plan.function_name = match mode {
                StatisticalMode::Default => names.operation,
                StatisticalMode::Population => names.population,
                StatisticalMode::Sample => names.sample,
            }
            .to_string();
            Ok(plan)
        })
        .sqlite(|_| Err(RenderError::unsupported_function(names.operation, Dialect::Sqlite)))
        .try_exec(dialect, plan)
}

/// Standard deviation
#[derive(Debug, Clone, PartialEq)]
pub struct StdDev {
    expression: AggregateExpression,
}

impl StdDev {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::StdDev),
        }
    }
}

impl Default for StdDev {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for StdDev {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        rewrite_statistical(&STDDEV, self.expression.statistical_mode, plan, dialect)
    }
}

impl Statistical for StdDev {}

/// Variance
#[derive(Debug, Clone, PartialEq)]
pub struct Variance {
    expression: AggregateExpression,
}

impl Variance {
    pub fn new() -> Self {
        Self {
            expression: AggregateExpression::new(AggregateFamily::Variance),
        }
    }
}

impl Default for Variance {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregate for Variance {
    fn expression(&self) -> &AggregateExpression {
        &self.expression
    }

    fn expression_mut(&mut self) -> &mut AggregateExpression {
        &mut self.expression
    }

    fn rewrite(&self, plan: RenderPlan, dialect: Dialect) -> Result<RenderPlan, RenderError> {
        rewrite_statistical(&VARIANCE, self.expression.statistical_mode, plan, dialect)
    }
}

impl Statistical for Variance {}
