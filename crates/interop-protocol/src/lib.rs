//! Shared protocol types for the interop platform's Excel and database
//! services.
//!
//! Every operation against the platform is "serialize an argument object,
//! invoke a named remote method, deserialize the `returned` object". This
//! crate holds those argument and result shapes. Field names on the wire are
//! camelCase and are fixed by the platform — the serde renames here are part
//! of the contract, not a style choice.

pub mod args;
pub mod callback;
pub mod ctp;
pub mod datasource;
pub mod range;
pub mod result;
pub mod ribbon;
pub mod table;

// Re-exports for convenience
pub use args::SaveConflictResolution;
pub use callback::{CallbackEvent, CallbackInfo, Lifetime, SubscriptionInfo, TargetType};
pub use ctp::{
    CtpDescriptor, Thickness, UiDescriptor, UiHorizontalAlignment, UiType, UiVerticalAlignment,
};
pub use datasource::{Column, ColumnType, DataSource};
pub use range::{DataOrientation, RangeInfo};
pub use result::ServiceResult;
pub use ribbon::{RibbonObject, RibbonObjectType};
pub use table::{TableColumnChange, TableColumnInfo, TableColumnOp};
