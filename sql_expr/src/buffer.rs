//! SQL output buffer
//!
//! Rendering appends text and bound parameters to a [`SqlBuffer`]. The buffer
//! knows the active dialect, so placeholders are numbered in emission order
//! and spelled the way the target engine expects.

use dialect::Dialect;
use serde_json::Value;

use crate::errors::RenderError;
use crate::validation::ValidatedColumn;

/// Anything that can be written into a [`SqlBuffer`]
pub trait ToSql {
    fn to_sql(&self, buf: &mut SqlBuffer) -> Result<(), RenderError>;
}

/// Rendering switches that do not depend on the expression itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emulate `FILTER (WHERE ...)` even where the dialect supports it
    pub force_filter_emulation: bool,
    /// Validate column identifiers while rendering
    pub strict_identifiers: bool,
}

#[derive(Debug, Clone)]
pub struct SqlBuffer {
    dialect: Dialect,
    options: RenderOptions,
    sql: String,
    params: Vec<Value>,
}

impl SqlBuffer {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_options(dialect, RenderOptions::default())
    }

    pub fn with_options(dialect: Dialect, options: RenderOptions) -> Self {
        Self {
            dialect,
            options,
            sql: String::new(),
            params: Vec::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Whether a `FILTER (WHERE ...)` clause may be emitted as-is
    pub fn native_filter(&self) -> bool {
        self.dialect.supports_filter_clause() && !self.options.force_filter_emulation
    }

    pub fn push_str(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    pub fn push_char(&mut self, c: char) -> &mut Self {
        self.sql.push(c);
        self
    }

    /// Write a column reference, validating it in strict mode
    pub fn push_identifier(&mut self, name: &str) -> Result<&mut Self, RenderError> {
        if self.options.strict_identifiers {
            ValidatedColumn::new(name)?;
        }
        self.sql.push_str(name);
        Ok(self)
    }

    /// Bind a parameter and write its placeholder
    pub fn push_param(&mut self, value: Value) -> &mut Self {
        self.params.push(value);
        let placeholder = self.dialect.placeholder(self.params.len());
        self.sql.push_str(&placeholder);
        self
    }

    /// Write an inline, escaped string literal
    pub fn push_quoted(&mut self, value: &str) -> &mut Self {
        let quoted = self.dialect.quote_string(value);
        self.sql.push_str(&quoted);
        self
    }

    /// Render items separated by `separator`
    pub fn push_list<T: ToSql>(&mut self, items: &[T], separator: &str) -> Result<(), RenderError> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            item.to_sql(self)?;
        }
        Ok(())
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}
