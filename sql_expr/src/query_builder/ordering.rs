//! Ordering terms
//!
//! Terms used inside an aggregate's `ORDER BY` list.

use crate::expression::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Placement of NULL values within an ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

impl NullsOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            NullsOrder::First => "NULLS FIRST",
            NullsOrder::Last => "NULLS LAST",
        }
    }
}

/// One entry of an `ORDER BY` list
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTerm {
    pub target: Expression,
    /// `None` for raw expression terms, which carry their own direction
    pub order: Option<SortOrder>,
    pub nulls: Option<NullsOrder>,
}

impl OrderTerm {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            target: Expression::column(column),
            order: Some(SortOrder::Asc),
            nulls: None,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            target: Expression::column(column),
            order: Some(SortOrder::Desc),
            nulls: None,
        }
    }

    /// A raw expression term, emitted exactly as given
    pub fn expr(target: Expression) -> Self {
        Self {
            target,
            order: None,
            nulls: None,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_to_sql() {
        assert_eq!(SortOrder::Asc.to_sql(), "ASC");
        assert_eq!(SortOrder::Desc.to_sql(), "DESC");
        assert_eq!(NullsOrder::Last.to_sql(), "NULLS LAST");
    }

    #[test]
    fn test_order_term_constructors() {
        let term = OrderTerm::desc("view_count").nulls_last();
        assert_eq!(term.target, Expression::column("view_count"));
        assert_eq!(term.order, Some(SortOrder::Desc));
        assert_eq!(term.nulls, Some(NullsOrder::Last));

        let raw = OrderTerm::expr(Expression::raw("LENGTH(title) DESC"));
        assert_eq!(raw.order, None);
        assert_eq!(raw.nulls, None);
    }
}
