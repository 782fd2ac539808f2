//! Data source descriptors for the embedded database service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Describes a database table: where it lives, its schema, and optionally
/// seed rows.
///
/// The same descriptor shape drives every database operation and the
/// Excel-side `CreateLinkedTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// Path to the database file. Omitted when creating a fresh in-memory
    /// database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Logical data source name; doubles as the default table name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<Vec<String>>,

    /// Seed/insert rows. Auto-increment columns take `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Vec<Value>>>,

    /// Do not persist the table beyond the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transient: Option<bool>,
}

/// Schema definition for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,

    #[serde(rename = "type")]
    pub column_type: ColumnType,

    pub pk: bool,

    pub auto_increment: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl Column {
    /// A plain non-key column of the given type.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            pk: false,
            auto_increment: false,
            nullable: None,
            default_value: None,
        }
    }

    /// An auto-incrementing integer primary key.
    pub fn auto_pk(name: impl Into<String>) -> Self {
        Self {
            pk: true,
            auto_increment: true,
            nullable: Some(false),
            ..Self::new(name, ColumnType::Integer)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Text,
    Boolean,
    DateTime,
    Float,
    Decimal,
}
