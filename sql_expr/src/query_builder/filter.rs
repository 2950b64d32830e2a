//! Structured predicates for aggregate `FILTER (WHERE ...)` clauses
//!
//! Values are always bound as parameters. A comparison against JSON `null`
//! becomes an `IS [NOT] NULL` check.

use serde_json::Value;

/// Binary comparison between a column and a bound value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    /// Case insensitive LIKE; rewritten with LOWER() off PostgreSQL
    ILike,
}

impl Comparison {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "!=",
            Comparison::Gt => ">",
            Comparison::Gte => ">=",
            Comparison::Lt => "<",
            Comparison::Lte => "<=",
            Comparison::Like => "LIKE",
            Comparison::ILike => "ILIKE",
        }
    }
}

/// Predicate tree
#[derive(Debug, Clone, PartialEq)]
pub enum QueryFilter {
    Compare {
        column: String,
        comparison: Comparison,
        value: Value,
    },
    Between {
        column: String,
        low: Value,
        high: Value,
    },
    InList {
        column: String,
        values: Vec<Value>,
        negated: bool,
    },
    IsNull {
        column: String,
        negated: bool,
    },
    Not(Box<QueryFilter>),
    /// Conjunction; empty is true
    All(Vec<QueryFilter>),
    /// Disjunction; empty is false
    Any(Vec<QueryFilter>),
}

impl QueryFilter {
    pub fn compare(column: impl Into<String>, comparison: Comparison, value: impl Into<Value>) -> Self {
        Self::Compare {
            column: column.into(),
            comparison,
            value: value.into(),
        }
    }

    pub fn and(filters: Vec<QueryFilter>) -> Self {
        Self::All(filters)
    }

    pub fn or(filters: Vec<QueryFilter>) -> Self {
        Self::Any(filters)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(filter: QueryFilter) -> Self {
        Self::Not(Box::new(filter))
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Comparison::Eq, value)
    }

    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Comparison::Ne, value)
    }

    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Comparison::Gt, value)
    }

    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Comparison::Gte, value)
    }

    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Comparison::Lt, value)
    }

    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Comparison::Lte, value)
    }

    pub fn like(column: impl Into<String>, pattern: &str) -> Self {
        Self::compare(column, Comparison::Like, pattern)
    }

    pub fn ilike(column: impl Into<String>, pattern: &str) -> Self {
        Self::compare(column, Comparison::ILike, pattern)
    }

    /// Inclusive range, e.g. a reporting window
    pub fn between(column: impl Into<String>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self::Between {
            column: column.into(),
            low: low.into(),
            high: high.into(),
        }
    }

    pub fn in_values(column: impl Into<String>, values: Vec<Value>) -> Self {
        Self::InList {
            column: column.into(),
            values,
            negated: false,
        }
    }

    pub fn not_in_values(column: impl Into<String>, values: Vec<Value>) -> Self {
        Self::InList {
            column: column.into(),
            values,
            negated: true,
        }
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Self::IsNull {
            column: column.into(),
            negated: false,
        }
    }

    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::IsNull {
            column: column.into(),
            negated: true,
        }
    }
}
