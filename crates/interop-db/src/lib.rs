//! Embedded-database access over the interop platform.
//!
//! [`DbService`] wraps the platform's database service: create or load a
//! database from a [`DataSource`] descriptor, insert and update rows, run
//! queries, and dispose. All operations are plain request/response — no
//! callbacks, no subscriptions.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use interop_db::DbService;
//! use interop_protocol::{Column, ColumnType, DataSource};
//!
//! # async fn example(interop: Arc<impl interop_client::InteropApi>) -> interop_client::Result<()> {
//! let db = DbService::new(interop);
//! let source = DataSource {
//!     name: "UserTable".into(),
//!     columns: vec![
//!         Column::auto_pk("ID"),
//!         Column::new("Name", ColumnType::Text),
//!     ],
//!     primary_key: Some(vec!["ID".into()]),
//!     ..DataSource::default()
//! };
//! db.init(source.clone()).await?;
//! let rows = db.execute_query(source, "select * from UserTable").await?;
//! println!("{:?}", rows.data);
//! # Ok(())
//! # }
//! ```

mod service;

pub use service::{DbService, DEFAULT_METHOD_NAMESPACE};

// Commonly used protocol types, re-exported for convenience
pub use interop_client::{InteropApi, InteropError, Result};
pub use interop_protocol::{Column, ColumnType, DataSource, ServiceResult};
