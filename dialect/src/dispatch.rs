//! Per-dialect dispatch
//!
//! Callers register optional handlers for the dialects they know how to
//! express, plus an optional default. Exactly one handler runs for the active
//! dialect.
//!
//! ```
//! use dialect::{Dialect, DialectHandlers};
//!
//! let name = DialectHandlers::new("JSON_ARRAY_AGG")
//!     .postgres(|_: ()| "JSON_AGG")
//!     .mysql(|_| "JSON_ARRAYAGG")
//!     .sqlite(|_| "JSON_GROUP_ARRAY")
//!     .exec(Dialect::MySql, ());
//!
//! assert_eq!(name, Some("JSON_ARRAYAGG"));
//! ```

use crate::errors::DispatchError;
use crate::types::Dialect;

type Handler<'a, I, T> = Box<dyn FnOnce(I) -> T + 'a>;

/// Optional handlers keyed by dialect
pub struct DialectHandlers<'a, I, T> {
    operation: &'static str,
    postgres: Option<Handler<'a, I, T>>,
    mysql: Option<Handler<'a, I, T>>,
    sqlite: Option<Handler<'a, I, T>>,
    oracle: Option<Handler<'a, I, T>>,
    sqlserver: Option<Handler<'a, I, T>>,
    default: Option<Handler<'a, I, T>>,
}

impl<'a, I, T> DialectHandlers<'a, I, T> {
    /// Start an empty handler table for the named operation
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            postgres: None,
            mysql: None,
            sqlite: None,
            oracle: None,
            sqlserver: None,
            default: None,
        }
    }

    pub fn postgres(mut self, handler: impl FnOnce(I) -> T + 'a) -> Self {
        self.postgres = Some(Box::new(handler));
        self
    }

    pub fn mysql(mut self, handler: impl FnOnce(I) -> T + 'a) -> Self {
        self.mysql = Some(Box::new(handler));
        self
    }

    pub fn sqlite(mut self, handler: impl FnOnce(I) -> T + 'a) -> Self {
        self.sqlite = Some(Box::new(handler));
        self
    }

    pub fn oracle(mut self, handler: impl FnOnce(I) -> T + 'a) -> Self {
        self.oracle = Some(Box::new(handler));
        self
    }

    pub fn sqlserver(mut self, handler: impl FnOnce(I) -> T + 'a) -> Self {
        self.sqlserver = Some(Box::new(handler));
        self
    }

    /// Handler used when the active dialect has none of its own
    pub fn default(mut self, handler: impl FnOnce(I) -> T + 'a) -> Self {
        self.default = Some(Box::new(handler));
        self
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    fn select(self, dialect: Dialect) -> Option<Handler<'a, I, T>> {
        let specific = match dialect {
            Dialect::Postgres => self.postgres,
            Dialect::MySql => self.mysql,
            Dialect::Sqlite => self.sqlite,
            Dialect::Oracle => self.oracle,
            Dialect::SqlServer => self.sqlserver,
        };
        specific.or(self.default)
    }

    /// Run the matching handler; a missing handler is a no-op
    pub fn exec(self, dialect: Dialect, input: I) -> Option<T> {
        self.select(dialect).map(|handler| handler(input))
    }
}

impl<'a, I, O, E> DialectHandlers<'a, I, Result<O, E>>
where
    E: From<DispatchError>,
{
    /// Run the matching handler and propagate its error.
    ///
    /// Fails with [`DispatchError::Unsupported`] when neither a dialect
    /// handler nor a default is registered.
    pub fn try_exec(self, dialect: Dialect, input: I) -> Result<O, E> {
        let operation = self.operation;
        match self.select(dialect) {
            Some(handler) => handler(input),
            None => Err(DispatchError::Unsupported { operation, dialect }.into()),
        }
    }
}
