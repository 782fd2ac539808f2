//! Excel table column descriptors.

use serde::{Deserialize, Serialize};

/// A structural change to apply to a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableColumnOp {
    Add,
    Delete,
    Rename,
    Update,
}

/// One column operation in an `UpdateTableColumns` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumnChange {
    /// Existing column name the operation targets.
    pub old_name: String,

    /// New name (for `Rename`/`Add`) or the targeted name otherwise.
    pub name: String,

    /// Zero-based position for `Add`; `None` appends.
    pub position: Option<u32>,

    pub op: TableColumnOp,
}

/// Column metadata returned by `DescribeTableColumns`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumnInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A1-style address of the column's data body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
