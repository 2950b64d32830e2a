//! SELECT projection items
//!
//! Plain columns and aggregates side by side, each with an optional alias.

use aggregate::Aggregate;
use sql_expr::{RenderError, SqlBuffer, ToSql};

/// One entry of a SELECT list
#[derive(Debug)]
pub enum SelectItem {
    /// Select all fields: `*`
    All,
    /// Select a column: `field`
    Field(String),
    /// Select a column with alias: `field AS alias`
    FieldWithAlias { field: String, alias: String },
    /// Select an aggregate, aliased by the builder's own `alias()`
    Aggregate(Box<dyn Aggregate>),
}

impl SelectItem {
    pub fn all() -> Self {
        SelectItem::All
    }

    pub fn field(field: impl Into<String>) -> Self {
        SelectItem::Field(field.into())
    }

    pub fn field_as(field: impl Into<String>, alias: impl Into<String>) -> Self {
        SelectItem::FieldWithAlias {
            field: field.into(),
            alias: alias.into(),
        }
    }

    pub fn aggregate(aggregate: Box<dyn Aggregate>) -> Self {
        SelectItem::Aggregate(aggregate)
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            SelectItem::All | SelectItem::Field(_) => None,
            SelectItem::FieldWithAlias { alias, .. } => Some(alias),
            SelectItem::Aggregate(aggregate) => aggregate.alias_name(),
        }
    }
}

impl<A: Aggregate + 'static> From<A> for SelectItem {
    fn from(aggregate: A) -> Self {
        SelectItem::Aggregate(Box::new(aggregate))
    }
}

impl ToSql for SelectItem {
    fn to_sql(&self, buf: &mut SqlBuffer) -> Result<(), RenderError> {
        match self {
            SelectItem::All => {
                buf.push_char('*');
            }
            SelectItem::Field(field) | SelectItem::FieldWithAlias { field, .. } => {
                buf.push_identifier(field)?;
            }
            SelectItem::Aggregate(aggregate) => aggregate.render(buf)?,
        }

        if let Some(alias) = self.alias() {
            buf.push_str(" AS ");
            buf.push_identifier(alias)?;
        }
        Ok(())
    }
}
