//! The database service wrapper.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use interop_client::{InteropApi, Result};
use interop_protocol::args::{
    DataSourceArgs, ExecuteQueryArgs, UpdateColumnsArgs, UpdateRowArgs,
};
use interop_protocol::{DataSource, ServiceResult};

/// Default namespace prefix for the database service's remote methods.
pub const DEFAULT_METHOD_NAMESPACE: &str = "T42.DB.";

/// Client wrapper for the platform's embedded-database service.
pub struct DbService<I: InteropApi> {
    interop: Arc<I>,
    method_ns: String,
}

impl<I: InteropApi> DbService<I> {
    /// Create a service handle with the default `T42.DB.` namespace.
    pub fn new(interop: Arc<I>) -> Self {
        Self::with_namespace(interop, DEFAULT_METHOD_NAMESPACE)
    }

    /// Create a service handle with a custom method namespace prefix.
    pub fn with_namespace(interop: Arc<I>, method_ns: impl Into<String>) -> Self {
        Self {
            interop,
            method_ns: method_ns.into(),
        }
    }

    async fn invoke<A: Serialize>(&self, method: &str, args: &A) -> Result<ServiceResult> {
        let full_name = format!("{}{}", self.method_ns, method);
        let payload = serde_json::to_value(args)?;
        tracing::trace!("Invoking {full_name}");
        let invocation = self.interop.invoke(&full_name, payload).await?;
        invocation.decode()
    }

    /// Create the database described by the data source, or load it from
    /// `file` when set.
    pub async fn init(&self, data_source: DataSource) -> Result<ServiceResult> {
        self.invoke("Init", &DataSourceArgs { data_source }).await
    }

    /// Create the data source's table without seeding data.
    pub async fn create_table(&self, data_source: DataSource) -> Result<ServiceResult> {
        self.invoke("CreateTable", &DataSourceArgs { data_source })
            .await
    }

    /// Insert the data source's `data` rows into its table.
    pub async fn insert_data(&self, data_source: DataSource) -> Result<ServiceResult> {
        self.invoke("InsertData", &DataSourceArgs { data_source })
            .await
    }

    /// Replace a full row, addressed by primary-key value.
    pub async fn update_row(
        &self,
        data_source: DataSource,
        row_data: Vec<Value>,
        pk_value: Value,
    ) -> Result<ServiceResult> {
        self.invoke(
            "UpdateRow",
            &UpdateRowArgs {
                data_source,
                row_data,
                pk_value,
            },
        )
        .await
    }

    /// Update individual columns of a row, addressed by primary-key value.
    pub async fn update_columns(
        &self,
        data_source: DataSource,
        updates: serde_json::Map<String, Value>,
        pk_value: Value,
    ) -> Result<ServiceResult> {
        self.invoke(
            "UpdateColumns",
            &UpdateColumnsArgs {
                data_source,
                updates,
                pk_value,
            },
        )
        .await
    }

    /// Run a SQL query against the data source's database.
    pub async fn execute_query(
        &self,
        data_source: DataSource,
        query: &str,
    ) -> Result<ServiceResult> {
        self.invoke(
            "ExecuteQuery",
            &ExecuteQueryArgs {
                data_source,
                query: query.to_string(),
            },
        )
        .await
    }

    /// Release the database and any resources the service holds for it.
    pub async fn dispose(&self, data_source: DataSource) -> Result<ServiceResult> {
        self.invoke("Dispose", &DataSourceArgs { data_source }).await
    }
}
