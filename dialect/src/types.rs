//! Dialect definitions
//!
//! This module describes the supported SQL engines and the
//! syntax capabilities the aggregate compiler relies on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseDialectError;

/// Supported SQL engines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    #[serde(alias = "mariadb")]
    MySql,
    Sqlite,
    Oracle,
    #[serde(alias = "mssql")]
    SqlServer,
}

/// How bound parameters are spelled in SQL text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `$1`, `$2`, ...
    Dollar,
    /// `?` for every parameter
    QuestionMark,
    /// `:1`, `:2`, ...
    Colon,
    /// `@p1`, `@p2`, ...
    AtP,
}

impl Dialect {
    /// All dialects, in declaration order
    pub const ALL: [Dialect; 5] = [
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::Sqlite,
        Dialect::Oracle,
        Dialect::SqlServer,
    ];

    /// Human readable engine name
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "PostgreSQL",
            Dialect::MySql => "MySQL",
            Dialect::Sqlite => "SQLite",
            Dialect::Oracle => "Oracle",
            Dialect::SqlServer => "SQL Server",
        }
    }

    /// Whether `agg(...) FILTER (WHERE ...)` is understood natively
    pub fn supports_filter_clause(&self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Sqlite)
    }

    /// Whether `ORDER BY x NULLS FIRST|LAST` is understood natively
    pub fn supports_nulls_ordering(&self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Sqlite | Dialect::Oracle)
    }

    /// Whether `ILIKE` exists
    pub fn supports_ilike(&self) -> bool {
        matches!(self, Dialect::Postgres)
    }

    pub fn placeholder_style(&self) -> PlaceholderStyle {
        match self {
            Dialect::Postgres => PlaceholderStyle::Dollar,
            Dialect::MySql | Dialect::Sqlite => PlaceholderStyle::QuestionMark,
            Dialect::Oracle => PlaceholderStyle::Colon,
            Dialect::SqlServer => PlaceholderStyle::AtP,
        }
    }

    /// Placeholder for the given 1-based parameter index
    pub fn placeholder(&self, index: usize) -> String {
        match self.placeholder_style() {
            PlaceholderStyle::Dollar => format!("${}", index),
            PlaceholderStyle::QuestionMark => "?".to_string(),
            PlaceholderStyle::Colon => format!(":{}", index),
            PlaceholderStyle::AtP => format!("@p{}", index),
        }
    }

    /// Quote a string as an inline SQL literal
    pub fn quote_string(&self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('\'');
        for c in value.chars() {
            match c {
                '\'' => quoted.push_str("''"),
                // MySQL treats backslash as an escape character inside literals
                '\\' if matches!(self, Dialect::MySql) => quoted.push_str("\\\\"),
                other => quoted.push(other),
            }
        }
        quoted.push('\'');
        quoted
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "sqlite" => Ok(Dialect::Sqlite),
            "oracle" => Ok(Dialect::Oracle),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            _ => Err(ParseDialectError(s.to_string())),
        }
    }
}
