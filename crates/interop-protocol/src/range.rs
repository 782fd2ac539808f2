//! Range addressing for Excel-side operations.

use serde::{Deserialize, Serialize};

/// A reference to a target range in a workbook.
///
/// All fields are optional on the wire: the service fills in the active
/// workbook/worksheet for omitted parts, and `range` accepts any A1-style
/// reference (`"A1"`, `"B2:D10"`, a named range, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workbook: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worksheet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Number format applied to the range when writing (e.g. `"0.00%"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,

    /// Grow the range to fit the written data instead of truncating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_range: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_orientation: Option<DataOrientation>,

    /// Ensure the workbook and worksheet exist. If they don't, they will be
    /// created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_create: Option<bool>,
}

impl RangeInfo {
    /// Shorthand for the common workbook/worksheet/range triple.
    pub fn new(
        workbook: impl Into<String>,
        worksheet: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            workbook: Some(workbook.into()),
            worksheet: Some(worksheet.into()),
            range: Some(range.into()),
            ..Self::default()
        }
    }
}

/// Orientation used when resizing a range to written data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataOrientation {
    Horizontal,
    Vertical,
}
