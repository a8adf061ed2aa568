//! SchemaFlow core
//!
//! Building blocks shared by the SchemaFlow migration tooling:
//! - [`statement`]: database-agnostic change statements
//! - [`database`]: the database abstraction and its connection lifecycle,
//!   which keeps a connection's auto-commit mode in line with the database's
//!   policy while it is attached
//! - [`postgres`]: a PostgreSQL connection handle

pub mod config;
pub mod connection;
pub mod database;
pub mod error;
pub mod postgres;
pub mod statement;

#[cfg(test)]
mod testing;

pub use connection::DatabaseConnection;
pub use database::{Database, DatabaseKind};
pub use error::{ConnectionError, ConnectionResult};
pub use statement::SqlStatement;
