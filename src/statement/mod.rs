//! Change statements
//!
//! Database-agnostic descriptions of schema changes. Statements are inert
//! values: SQL generation for a particular product happens elsewhere, by
//! matching on [`SqlStatement`].

mod changes;
mod models;

pub use models::*;

use serde::{Deserialize, Serialize};

/// Every kind of change statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum SqlStatement {
    /// Add a foreign key constraint
    AddForeignKeyConstraint(AddForeignKeyConstraintStatement),
    /// Drop a foreign key constraint
    DropForeignKeyConstraint(DropForeignKeyConstraintStatement),
    /// Drop a primary key
    DropPrimaryKey(DropPrimaryKeyStatement),
    /// Drop a unique constraint
    DropUniqueConstraint(DropUniqueConstraintStatement),
    /// Drop an index
    DropIndex(DropIndexStatement),
    /// Drop a table
    DropTable(DropTableStatement),
}

macro_rules! impl_from_statement {
    ($($variant:ident => $statement:ty),* $(,)?) => {
        $(
            impl From<$statement> for SqlStatement {
                fn from(statement: $statement) -> Self {
                    SqlStatement::$variant(statement)
                }
            }
        )*
    };
}

impl_from_statement! {
    AddForeignKeyConstraint => AddForeignKeyConstraintStatement,
    DropForeignKeyConstraint => DropForeignKeyConstraintStatement,
    DropPrimaryKey => DropPrimaryKeyStatement,
    DropUniqueConstraint => DropUniqueConstraintStatement,
    DropIndex => DropIndexStatement,
    DropTable => DropTableStatement,
}
