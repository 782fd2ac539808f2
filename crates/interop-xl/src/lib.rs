//! Excel automation over the interop platform.
//!
//! [`XlService`] wraps the platform's Excel service: workbooks, range I/O,
//! tables, menus, custom task panes, and change subscriptions. Every method
//! formats a typed argument object, invokes the namespaced remote method,
//! and unwraps the service's result object.
//!
//! Subscriptions share a single callback endpoint. The service registers it
//! once at construction and routes notifications to the caller's handlers by
//! the correlation identifier the remote side issues — see
//! [`interop_client::CallbackRouter`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use interop_protocol::RangeInfo;
//! use interop_xl::XlService;
//!
//! # async fn example(interop: Arc<impl interop_client::InteropApi>) -> interop_client::Result<()> {
//! let xl = XlService::connect(interop).await?;
//! let range = RangeInfo::new("Book1", "Sheet1", "A1:B5");
//! let result = xl
//!     .subscribe(range, Arc::new(|event| println!("changed: {event:?}")))
//!     .await?;
//! println!("subscribed as {:?}", result.subscription_id);
//! # Ok(())
//! # }
//! ```

mod service;

pub use service::{XlService, DEFAULT_METHOD_NAMESPACE, XL_SERVICE_CALLBACK_ENDPOINT};

// Commonly used protocol types, re-exported for convenience
pub use interop_client::{CallbackHandler, InteropApi, InteropError, Result};
pub use interop_protocol::{
    CallbackEvent, CtpDescriptor, RangeInfo, SaveConflictResolution, ServiceResult,
    SubscriptionInfo, TableColumnChange,
};
