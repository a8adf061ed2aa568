//! Statement inspection helpers
//!
//! Provides utilities for working with change statements.

use crate::statement::SqlStatement;

fn qualified(schema: Option<&str>, name: &str) -> String {
    match schema {
        Some(schema) => format!("{}.{}", schema, name),
        None => name.to_string(),
    }
}

impl SqlStatement {
    /// Get a human-readable description of the change
    pub fn description(&self) -> String {
        match self {
            SqlStatement::AddForeignKeyConstraint(s) => format!(
                "Add foreign key {} from {}({}) to {}({})",
                s.constraint_name(),
                qualified(s.base_table_schema_name(), s.base_table_name()),
                s.base_column_names().join(", "),
                qualified(s.referenced_table_schema_name(), s.referenced_table_name()),
                s.referenced_column_names().join(", ")
            ),
            SqlStatement::DropForeignKeyConstraint(s) => format!(
                "Drop foreign key {} from {}",
                s.constraint_name(),
                qualified(s.schema_name(), s.table_name())
            ),
            SqlStatement::DropPrimaryKey(s) => {
                format!("Drop primary key from {}", qualified(s.schema_name(), s.table_name()))
            }
            SqlStatement::DropUniqueConstraint(s) => format!(
                "Drop unique constraint {} from {}",
                s.constraint_name(),
                qualified(s.schema_name(), s.table_name())
            ),
            SqlStatement::DropIndex(s) => match s.table_name() {
                Some(table) => format!(
                    "Drop index {} on {}",
                    s.index_name(),
                    qualified(s.table_schema_name(), table)
                ),
                None => format!("Drop index {}", qualified(s.table_schema_name(), s.index_name())),
            },
            SqlStatement::DropTable(s) => format!(
                "Drop table {}{}",
                qualified(s.schema_name(), s.table_name()),
                if s.cascade_constraints() { " cascading constraints" } else { "" }
            ),
        }
    }

    /// Get the target table (schema, table) for this change
    pub fn target_table(&self) -> Option<(Option<&str>, &str)> {
        match self {
            SqlStatement::AddForeignKeyConstraint(s) => {
                Some((s.base_table_schema_name(), s.base_table_name()))
            }
            SqlStatement::DropForeignKeyConstraint(s) => Some((s.schema_name(), s.table_name())),
            SqlStatement::DropPrimaryKey(s) => Some((s.schema_name(), s.table_name())),
            SqlStatement::DropUniqueConstraint(s) => Some((s.schema_name(), s.table_name())),
            SqlStatement::DropIndex(s) => s.table_name().map(|table| (s.table_schema_name(), table)),
            SqlStatement::DropTable(s) => Some((s.schema_name(), s.table_name())),
        }
    }

    /// Check if this is a destructive change
    pub fn is_destructive(&self) -> bool {
        !matches!(self, SqlStatement::AddForeignKeyConstraint(_))
    }

    /// Check if this change requires a table lock
    pub fn requires_table_lock(&self) -> bool {
        matches!(
            self,
            SqlStatement::AddForeignKeyConstraint(_)
                | SqlStatement::DropForeignKeyConstraint(_)
                | SqlStatement::DropPrimaryKey(_)
                | SqlStatement::DropUniqueConstraint(_)
                | SqlStatement::DropTable(_)
        )
    }
}
