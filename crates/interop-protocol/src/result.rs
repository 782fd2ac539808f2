//! The result object every service method unwraps from `returned`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::callback::SubscriptionInfo;
use crate::range::RangeInfo;
use crate::ribbon::RibbonObject;
use crate::table::TableColumnInfo;

/// Result payload of an Excel or database service call.
///
/// The service reports every operation through the same object; which fields
/// are populated depends on the method. Unknown fields are ignored so the
/// client stays compatible with newer service builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    // Common properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workbook: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worksheet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    // Table-related properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<TableColumnInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_count: Option<u64>,

    // Custom-task-pane properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctp_host_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctp_store: Option<Value>,

    // Menu-related properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_info: Option<SubscriptionInfo>,

    // File operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    // Window properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_window: Option<String>,

    // Ribbon properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tabs: Option<Vec<RibbonObject>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ribbon_data_location: Option<String>,

    // Data properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Value>,
}

impl ServiceResult {
    /// Whether the service reported the operation as successful.
    ///
    /// A missing `success` field counts as success: older service builds
    /// only populate it on failure.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }
}
