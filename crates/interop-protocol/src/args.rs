//! Argument objects for each remote method.
//!
//! These are the typed request shapes the services serialize and pass to
//! `invoke`. One struct per method (or per family of methods that share a
//! shape), named after the remote method rather than the Rust API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::callback::SubscriptionInfo;
use crate::ctp::CtpDescriptor;
use crate::datasource::DataSource;
use crate::range::RangeInfo;
use crate::table::TableColumnChange;

/// Conflict policy used when Excel saves a shared workbook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveConflictResolution {
    #[default]
    #[serde(rename = "xlUserResolution")]
    UserResolution,
    #[serde(rename = "xlLocalSessionChanges")]
    LocalSessionChanges,
    #[serde(rename = "xlOtherSessionChanges")]
    OtherSessionChanges,
}

// ---------------------------------------------------------------------------
// Excel service
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkbookArgs {
    pub workbook_file: String,
    pub worksheet: String,
    pub save_conflict_resolution: SaveConflictResolution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenWorkbookArgs {
    pub file_name: String,
}

/// Shared by `Subscribe` and `SubscribeDeltas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeArgs {
    pub range: RangeInfo,
    pub subscription_info: SubscriptionInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestroySubscriptionArgs {
    pub subscription_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadArgs {
    pub range: RangeInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteArgs {
    pub range: RangeInfo,
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableArgs {
    pub range: RangeInfo,
    pub table_name: String,
    pub table_style: String,
    pub columns: Vec<String>,
    pub value: Vec<Vec<Value>>,
    pub subscription_info: SubscriptionInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkedTableArgs {
    pub range: RangeInfo,
    pub data_source: DataSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_info: Option<SubscriptionInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTableArgs {
    pub range: RangeInfo,
    pub table_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteTableRowsArgs {
    pub range: RangeInfo,
    pub table_name: String,
    /// One-based row position to write at; `null` appends.
    pub row_position: Option<u32>,
    pub value: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadTableRowsArgs {
    pub range: RangeInfo,
    pub table_name: String,
    pub from_row: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_to_read: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableColumnsArgs {
    pub range: RangeInfo,
    pub table_name: String,
    pub column_ops: Vec<TableColumnChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTableColumnsArgs {
    pub range: RangeInfo,
    pub table_name: String,
}

/// Shared by `ReadXlRef` (no value) and `WriteXlRef` (with value).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XlRefArgs {
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAsArgs {
    pub range: RangeInfo,
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContextMenuArgs {
    pub caption: String,
    pub menu_path: Vec<String>,
    pub range: RangeInfo,
    pub subscription_info: SubscriptionInfo,
}

/// Shared by `DestroyContextMenu` and `DestroyRibbonMenu`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestroyMenuArgs {
    pub menu_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDynamicRibbonMenuArgs {
    pub caption: String,
    pub range: RangeInfo,
    pub subscription_info: SubscriptionInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdateCtpArgs {
    pub range: RangeInfo,
    pub ctp_descriptor: CtpDescriptor,
    pub subscription_info: SubscriptionInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteCommentArgs {
    pub range: RangeInfo,
    pub comment: String,
}

/// Shared by `ClearComments`, `ClearContents` and `SetRangeFormat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeArgs {
    pub range: RangeInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyStylesArgs {
    pub range: RangeInfo,
    pub background_color: String,
    pub foreground_color: String,
}

// ---------------------------------------------------------------------------
// Database service
// ---------------------------------------------------------------------------

/// Shared by `Init`, `CreateTable`, `InsertData` and `Dispose`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceArgs {
    pub data_source: DataSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRowArgs {
    pub data_source: DataSource,
    pub row_data: Vec<Value>,
    pub pk_value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumnsArgs {
    pub data_source: DataSource,
    pub updates: serde_json::Map<String, Value>,
    pub pk_value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteQueryArgs {
    pub data_source: DataSource,
    pub query: String,
}
