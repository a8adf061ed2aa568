//! Change statement data models
//!
//! Each statement describes one atomic schema change. Fields are private and
//! exposed through accessors so a statement cannot change after it is built.
//! A `None` schema means the connection's default schema.

use serde::{Deserialize, Serialize};

/// Drop a foreign key constraint from the table that owns it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropForeignKeyConstraintStatement {
    schema_name: Option<String>,
    table_name: String,
    constraint_name: String,
}

impl DropForeignKeyConstraintStatement {
    pub fn new(
        schema_name: Option<String>,
        table_name: impl Into<String>,
        constraint_name: impl Into<String>,
    ) -> Self {
        Self {
            schema_name,
            table_name: table_name.into(),
            constraint_name: constraint_name.into(),
        }
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    /// Table owning the foreign key
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn constraint_name(&self) -> &str {
        &self.constraint_name
    }
}

/// Add a foreign key from `base_table` to `referenced_table`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddForeignKeyConstraintStatement {
    constraint_name: String,
    base_table_schema_name: Option<String>,
    base_table_name: String,
    base_column_names: Vec<String>,
    referenced_table_schema_name: Option<String>,
    referenced_table_name: String,
    referenced_column_names: Vec<String>,
}

impl AddForeignKeyConstraintStatement {
    pub fn new(
        constraint_name: impl Into<String>,
        base_table_schema_name: Option<String>,
        base_table_name: impl Into<String>,
        base_column_names: Vec<String>,
        referenced_table_schema_name: Option<String>,
        referenced_table_name: impl Into<String>,
        referenced_column_names: Vec<String>,
    ) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            base_table_schema_name,
            base_table_name: base_table_name.into(),
            base_column_names,
            referenced_table_schema_name,
            referenced_table_name: referenced_table_name.into(),
            referenced_column_names,
        }
    }

    pub fn constraint_name(&self) -> &str {
        &self.constraint_name
    }

    pub fn base_table_schema_name(&self) -> Option<&str> {
        self.base_table_schema_name.as_deref()
    }

    pub fn base_table_name(&self) -> &str {
        &self.base_table_name
    }

    pub fn base_column_names(&self) -> &[String] {
        &self.base_column_names
    }

    pub fn referenced_table_schema_name(&self) -> Option<&str> {
        self.referenced_table_schema_name.as_deref()
    }

    pub fn referenced_table_name(&self) -> &str {
        &self.referenced_table_name
    }

    pub fn referenced_column_names(&self) -> &[String] {
        &self.referenced_column_names
    }
}

/// Drop a table's primary key. Some products need the constraint name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPrimaryKeyStatement {
    schema_name: Option<String>,
    table_name: String,
    constraint_name: Option<String>,
}

impl DropPrimaryKeyStatement {
    pub fn new(
        schema_name: Option<String>,
        table_name: impl Into<String>,
        constraint_name: Option<String>,
    ) -> Self {
        Self {
            schema_name,
            table_name: table_name.into(),
            constraint_name,
        }
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn constraint_name(&self) -> Option<&str> {
        self.constraint_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropUniqueConstraintStatement {
    schema_name: Option<String>,
    table_name: String,
    constraint_name: String,
}

impl DropUniqueConstraintStatement {
    pub fn new(
        schema_name: Option<String>,
        table_name: impl Into<String>,
        constraint_name: impl Into<String>,
    ) -> Self {
        Self {
            schema_name,
            table_name: table_name.into(),
            constraint_name: constraint_name.into(),
        }
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn constraint_name(&self) -> &str {
        &self.constraint_name
    }
}

/// Drop an index. The table is required by products that scope index names
/// per table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropIndexStatement {
    index_name: String,
    table_schema_name: Option<String>,
    table_name: Option<String>,
}

impl DropIndexStatement {
    pub fn new(
        index_name: impl Into<String>,
        table_schema_name: Option<String>,
        table_name: Option<String>,
    ) -> Self {
        Self {
            index_name: index_name.into(),
            table_schema_name,
            table_name,
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn table_schema_name(&self) -> Option<&str> {
        self.table_schema_name.as_deref()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTableStatement {
    schema_name: Option<String>,
    table_name: String,
    cascade_constraints: bool,
}

impl DropTableStatement {
    pub fn new(schema_name: Option<String>, table_name: impl Into<String>, cascade_constraints: bool) -> Self {
        Self {
            schema_name,
            table_name: table_name.into(),
            cascade_constraints,
        }
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Also drop constraints in other tables that reference this one
    pub fn cascade_constraints(&self) -> bool {
        self.cascade_constraints
    }
}
