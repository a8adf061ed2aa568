//! Supported database products and their connection policies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Database product enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Postgres,
    MySql,
    Sqlite,
    H2,
    Oracle,
    MsSql,
}

/// How a reported product name is compared to the expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductNameMatch {
    Exact,
    IgnoreCase,
    /// Drivers append an edition or version to the name
    Prefix,
}

impl ProductNameMatch {
    pub fn matches(&self, expected: &str, reported: &str) -> bool {
        match self {
            ProductNameMatch::Exact => expected == reported,
            ProductNameMatch::IgnoreCase => expected.eq_ignore_ascii_case(reported),
            ProductNameMatch::Prefix => reported.starts_with(expected),
        }
    }
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 6] = [
        DatabaseKind::Postgres,
        DatabaseKind::MySql,
        DatabaseKind::Sqlite,
        DatabaseKind::H2,
        DatabaseKind::Oracle,
        DatabaseKind::MsSql,
    ];

    /// Product name as reported by the server's driver
    pub fn product_name(&self) -> &'static str {
        match self {
            DatabaseKind::Postgres => "PostgreSQL",
            DatabaseKind::MySql => "MySQL",
            DatabaseKind::Sqlite => "SQLite",
            DatabaseKind::H2 => "H2",
            DatabaseKind::Oracle => "Oracle",
            DatabaseKind::MsSql => "Microsoft SQL Server",
        }
    }

    pub fn product_name_match(&self) -> ProductNameMatch {
        match self {
            DatabaseKind::Postgres | DatabaseKind::Sqlite => ProductNameMatch::IgnoreCase,
            DatabaseKind::MySql | DatabaseKind::H2 | DatabaseKind::Oracle => ProductNameMatch::Exact,
            DatabaseKind::MsSql => ProductNameMatch::Prefix,
        }
    }

    /// Short identifier used in configuration
    pub fn short_name(&self) -> &'static str {
        match self {
            DatabaseKind::Postgres => "postgresql",
            DatabaseKind::MySql => "mysql",
            DatabaseKind::Sqlite => "sqlite",
            DatabaseKind::H2 => "h2",
            DatabaseKind::Oracle => "oracle",
            DatabaseKind::MsSql => "mssql",
        }
    }

    /// MySQL and Oracle implicitly commit around every DDL statement
    pub fn supports_ddl_in_transaction(&self) -> bool {
        !matches!(self, DatabaseKind::MySql | DatabaseKind::Oracle)
    }

    /// Auto-commit mode this product wants while a connection is managed.
    ///
    /// Products that can run DDL inside a transaction keep auto-commit off so
    /// a change set can be committed or rolled back as a unit.
    pub fn default_auto_commit(&self) -> bool {
        !self.supports_ddl_in_transaction()
    }

    /// Infer the product from a connection URL scheme
    pub fn from_url(conn_str: &str) -> Option<Self> {
        let scheme = conn_str.split_once("://").map(|(scheme, _)| scheme)?;
        scheme.parse().ok()
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.product_name())
    }
}

impl FromStr for DatabaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(DatabaseKind::Postgres),
            "mysql" => Ok(DatabaseKind::MySql),
            "sqlite" => Ok(DatabaseKind::Sqlite),
            "h2" => Ok(DatabaseKind::H2),
            "oracle" => Ok(DatabaseKind::Oracle),
            "mssql" | "sqlserver" => Ok(DatabaseKind::MsSql),
            other => Err(format!("Unsupported database kind: {}", other)),
        }
    }
}
