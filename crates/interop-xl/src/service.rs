//! The Excel service wrapper.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use interop_client::{CallbackHandler, CallbackRouter, InteropApi, Invocation, Result};
use interop_protocol::args::{
    ActivateArgs, ApplyStylesArgs, CreateContextMenuArgs, CreateDynamicRibbonMenuArgs,
    CreateLinkedTableArgs, CreateOrUpdateCtpArgs, CreateTableArgs, CreateWorkbookArgs,
    DescribeTableColumnsArgs, DestroyMenuArgs, DestroySubscriptionArgs, OpenWorkbookArgs,
    RangeArgs, ReadArgs, ReadTableRowsArgs, RefreshTableArgs, SaveAsArgs, SaveConflictResolution,
    SubscribeArgs, UpdateTableColumnsArgs, WriteArgs, WriteCommentArgs, WriteTableRowsArgs,
    XlRefArgs,
};
use interop_protocol::{
    CtpDescriptor, DataSource, RangeInfo, ServiceResult, SubscriptionInfo, TableColumnChange,
    UiDescriptor, UiType,
};

/// Name of the single callback endpoint shared by every subscription the
/// service creates. Pre-shared with the remote side; notifications for all
/// subscriptions arrive here.
pub const XL_SERVICE_CALLBACK_ENDPOINT: &str = "xlServiceCxtMenuCallback";

/// Default namespace prefix for the Excel service's remote methods.
pub const DEFAULT_METHOD_NAMESPACE: &str = "IO.XL.";

/// Client wrapper for the platform's Excel automation service.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct XlService<I: InteropApi> {
    interop: Arc<I>,
    method_ns: String,
    router: Arc<CallbackRouter>,
}

impl<I: InteropApi> XlService<I> {
    /// Connect with the default `IO.XL.` method namespace.
    pub async fn connect(interop: Arc<I>) -> Result<Self> {
        Self::connect_with_namespace(interop, DEFAULT_METHOD_NAMESPACE).await
    }

    /// Connect with a custom method namespace prefix.
    ///
    /// Registers the shared callback endpoint; fails if the platform rejects
    /// the registration, in which case no service instance is returned.
    pub async fn connect_with_namespace(
        interop: Arc<I>,
        method_ns: impl Into<String>,
    ) -> Result<Self> {
        let router = Arc::new(CallbackRouter::new());

        let endpoint_router = router.clone();
        interop
            .register(
                XL_SERVICE_CALLBACK_ENDPOINT,
                Arc::new(move |payload| endpoint_router.dispatch_raw(payload)),
            )
            .await?;

        tracing::info!("Registered shared callback endpoint '{XL_SERVICE_CALLBACK_ENDPOINT}'");

        Ok(Self {
            interop,
            method_ns: method_ns.into(),
            router,
        })
    }

    /// The callback router backing this service's subscriptions.
    pub fn router(&self) -> &CallbackRouter {
        &self.router
    }

    /// Invoke a namespaced service method and return the raw `returned`
    /// value.
    async fn invoke_raw<A: Serialize>(&self, method: &str, args: &A) -> Result<Value> {
        let full_name = format!("{}{}", self.method_ns, method);
        let payload = serde_json::to_value(args)?;
        tracing::trace!("Invoking {full_name}");
        let invocation = self.interop.invoke(&full_name, payload).await?;
        Ok(invocation.returned)
    }

    /// Invoke a namespaced service method and decode its result object.
    async fn invoke<A: Serialize>(&self, method: &str, args: &A) -> Result<ServiceResult> {
        let returned = self.invoke_raw(method, args).await?;
        Invocation::new(returned).decode()
    }

    /// Store a handler under the correlation identifier a call returned.
    ///
    /// A successful call that carries no identifier is a failed registration:
    /// the handler is dropped and a diagnostic emitted, but the result still
    /// goes back to the caller.
    fn store_handler(&self, method: &str, id: Option<&str>, handler: CallbackHandler) {
        match id {
            Some(id) => self.router.insert(id, handler),
            None => {
                tracing::warn!("{method} returned no correlation identifier, callback not stored");
            }
        }
    }

    fn shared_endpoint() -> SubscriptionInfo {
        SubscriptionInfo::endpoint(XL_SERVICE_CALLBACK_ENDPOINT)
    }

    // -- Workbook operations --

    /// Create a workbook (and worksheet) if they don't already exist.
    pub async fn create_workbook(
        &self,
        workbook_file: &str,
        worksheet: &str,
        save_conflict_resolution: SaveConflictResolution,
    ) -> Result<ServiceResult> {
        self.invoke(
            "CreateWorkbook",
            &CreateWorkbookArgs {
                workbook_file: workbook_file.to_string(),
                worksheet: worksheet.to_string(),
                save_conflict_resolution,
            },
        )
        .await
    }

    /// Open an existing workbook file in the running Excel instance.
    pub async fn open_workbook(&self, file_name: &str) -> Result<ServiceResult> {
        self.invoke(
            "OpenWorkbook",
            &OpenWorkbookArgs {
                file_name: file_name.to_string(),
            },
        )
        .await
    }

    /// Save the range's workbook under a new file name.
    pub async fn save_as(&self, range: RangeInfo, file_name: &str) -> Result<ServiceResult> {
        self.invoke(
            "SaveAs",
            &SaveAsArgs {
                range,
                file_name: file_name.to_string(),
            },
        )
        .await
    }

    /// Bring a range (or the whole application when `None`) to the front.
    pub async fn activate(&self, range: Option<RangeInfo>) -> Result<ServiceResult> {
        self.invoke("Activate", &ActivateArgs { range }).await
    }

    // -- Range I/O --

    /// Read a range's values.
    pub async fn read(&self, range: RangeInfo) -> Result<ServiceResult> {
        self.invoke("Read", &ReadArgs { range }).await
    }

    /// Write a value (scalar or row-major matrix) to a range.
    pub async fn write(&self, range: RangeInfo, value: Value) -> Result<ServiceResult> {
        self.invoke("Write", &WriteArgs { range, value }).await
    }

    /// Read by free-form Excel reference string (e.g. `"Book1!Sheet1!A1"`).
    pub async fn read_ref(&self, reference: &str) -> Result<ServiceResult> {
        self.invoke(
            "ReadXlRef",
            &XlRefArgs {
                reference: reference.to_string(),
                value: None,
            },
        )
        .await
    }

    /// Write by free-form Excel reference string.
    pub async fn write_ref(&self, reference: &str, value: Value) -> Result<ServiceResult> {
        self.invoke(
            "WriteXlRef",
            &XlRefArgs {
                reference: reference.to_string(),
                value: Some(value),
            },
        )
        .await
    }

    /// Clear a range's cell contents.
    pub async fn clear_contents(&self, range: RangeInfo) -> Result<ServiceResult> {
        self.invoke("ClearContents", &RangeArgs { range }).await
    }

    // -- Subscriptions --

    /// Subscribe to value changes of a range, with an explicit
    /// [`SubscriptionInfo`]. No local handler is registered.
    pub async fn subscribe_raw(
        &self,
        range: RangeInfo,
        subscription_info: SubscriptionInfo,
    ) -> Result<ServiceResult> {
        self.invoke(
            "Subscribe",
            &SubscribeArgs {
                range,
                subscription_info,
            },
        )
        .await
    }

    /// Subscribe to value changes of a range.
    ///
    /// The handler fires for each notification carrying the subscription's
    /// correlation identifier.
    pub async fn subscribe(
        &self,
        range: RangeInfo,
        callback: CallbackHandler,
    ) -> Result<ServiceResult> {
        let result = self.subscribe_raw(range, Self::shared_endpoint()).await?;
        self.store_handler("Subscribe", result.subscription_id.as_deref(), callback);
        Ok(result)
    }

    /// Subscribe to per-cell deltas of a range, with an explicit
    /// [`SubscriptionInfo`].
    pub async fn subscribe_deltas_raw(
        &self,
        range: RangeInfo,
        subscription_info: SubscriptionInfo,
    ) -> Result<ServiceResult> {
        self.invoke(
            "SubscribeDeltas",
            &SubscribeArgs {
                range,
                subscription_info,
            },
        )
        .await
    }

    /// Subscribe to per-cell deltas of a range.
    pub async fn subscribe_deltas(
        &self,
        range: RangeInfo,
        callback: CallbackHandler,
    ) -> Result<ServiceResult> {
        let result = self
            .subscribe_deltas_raw(range, Self::shared_endpoint())
            .await?;
        self.store_handler(
            "SubscribeDeltas",
            result.subscription_id.as_deref(),
            callback,
        );
        Ok(result)
    }

    /// Tear down a subscription. The local handler is removed once the
    /// remote side confirms; removing an unknown identifier is a no-op.
    pub async fn destroy_subscription(&self, subscription_id: &str) -> Result<ServiceResult> {
        let result = self
            .invoke(
                "DestroySubscription",
                &DestroySubscriptionArgs {
                    subscription_id: subscription_id.to_string(),
                },
            )
            .await?;
        self.router.remove(subscription_id);
        Ok(result)
    }

    // -- Tables --

    /// Create a table and subscribe to its change feed.
    pub async fn create_table(
        &self,
        range: RangeInfo,
        table_name: &str,
        table_style: &str,
        columns: Vec<String>,
        value: Vec<Vec<Value>>,
        callback: CallbackHandler,
    ) -> Result<ServiceResult> {
        let result = self
            .invoke(
                "CreateTable",
                &CreateTableArgs {
                    range,
                    table_name: table_name.to_string(),
                    table_style: table_style.to_string(),
                    columns,
                    value,
                    subscription_info: Self::shared_endpoint(),
                },
            )
            .await?;
        self.store_handler("CreateTable", result.subscription_id.as_deref(), callback);
        Ok(result)
    }

    /// Create a table linked to a database data source.
    pub async fn create_linked_table(
        &self,
        range: RangeInfo,
        data_source: DataSource,
        subscription_info: Option<SubscriptionInfo>,
    ) -> Result<ServiceResult> {
        self.invoke(
            "CreateLinkedTable",
            &CreateLinkedTableArgs {
                range,
                data_source,
                subscription_info,
            },
        )
        .await
    }

    /// Re-pull a linked table's data from its source.
    pub async fn refresh_table(&self, range: RangeInfo, table_name: &str) -> Result<ServiceResult> {
        self.invoke(
            "RefreshTable",
            &RefreshTableArgs {
                range,
                table_name: table_name.to_string(),
            },
        )
        .await
    }

    /// Write rows into a table. `row_position: None` appends.
    pub async fn write_table_rows(
        &self,
        range: RangeInfo,
        table_name: &str,
        row_position: Option<u32>,
        value: Vec<Vec<Value>>,
    ) -> Result<ServiceResult> {
        self.invoke(
            "WriteTableRows",
            &WriteTableRowsArgs {
                range,
                table_name: table_name.to_string(),
                row_position,
                value,
            },
        )
        .await
    }

    /// Read rows from a table, starting at the one-based `from_row`.
    pub async fn read_table_rows(
        &self,
        range: RangeInfo,
        table_name: &str,
        from_row: u32,
        rows_to_read: Option<u32>,
    ) -> Result<ServiceResult> {
        self.invoke(
            "ReadTableRows",
            &ReadTableRowsArgs {
                range,
                table_name: table_name.to_string(),
                from_row,
                rows_to_read,
            },
        )
        .await
    }

    /// Apply structural column operations to a table.
    pub async fn update_table_columns(
        &self,
        range: RangeInfo,
        table_name: &str,
        column_ops: Vec<TableColumnChange>,
    ) -> Result<ServiceResult> {
        self.invoke(
            "UpdateTableColumns",
            &UpdateTableColumnsArgs {
                range,
                table_name: table_name.to_string(),
                column_ops,
            },
        )
        .await
    }

    /// Describe a table's columns (names and data-body addresses).
    pub async fn describe_table_columns(
        &self,
        range: RangeInfo,
        table_name: &str,
    ) -> Result<ServiceResult> {
        self.invoke(
            "DescribeTableColumns",
            &DescribeTableColumnsArgs {
                range,
                table_name: table_name.to_string(),
            },
        )
        .await
    }

    // -- Context menus --

    /// Add a context-menu entry with an explicit [`SubscriptionInfo`].
    pub async fn create_context_menu_raw(
        &self,
        caption: &str,
        menu_path: Vec<String>,
        range: RangeInfo,
        subscription_info: SubscriptionInfo,
    ) -> Result<ServiceResult> {
        self.invoke(
            "CreateContextMenu",
            &CreateContextMenuArgs {
                caption: caption.to_string(),
                menu_path,
                range,
                subscription_info,
            },
        )
        .await
    }

    /// Add a context-menu entry for the range; clicks fire the handler.
    ///
    /// The menu identifier the service returns doubles as the correlation
    /// identifier for click notifications.
    pub async fn create_context_menu(
        &self,
        caption: &str,
        menu_path: Vec<String>,
        range: RangeInfo,
        callback: CallbackHandler,
    ) -> Result<ServiceResult> {
        let result = self
            .create_context_menu_raw(caption, menu_path, range, Self::shared_endpoint())
            .await?;
        self.store_handler("CreateContextMenu", result.menu_id.as_deref(), callback);
        Ok(result)
    }

    /// Remove a context-menu entry, keeping any local handler.
    pub async fn destroy_context_menu_raw(&self, menu_id: &str) -> Result<ServiceResult> {
        self.invoke(
            "DestroyContextMenu",
            &DestroyMenuArgs {
                menu_id: menu_id.to_string(),
            },
        )
        .await
    }

    /// Remove a context-menu entry and its click handler.
    pub async fn destroy_context_menu(&self, menu_id: &str) -> Result<ServiceResult> {
        let result = self.destroy_context_menu_raw(menu_id).await?;
        self.router.remove(menu_id);
        Ok(result)
    }

    // -- Ribbon menus --

    /// Add a dynamic ribbon menu with an explicit [`SubscriptionInfo`].
    pub async fn create_dynamic_ribbon_menu_raw(
        &self,
        caption: &str,
        range: RangeInfo,
        subscription_info: SubscriptionInfo,
    ) -> Result<ServiceResult> {
        self.invoke(
            "CreateDynamicRibbonMenu",
            &CreateDynamicRibbonMenuArgs {
                caption: caption.to_string(),
                range,
                subscription_info,
            },
        )
        .await
    }

    /// Add a dynamic ribbon menu; executing it fires the handler.
    pub async fn create_dynamic_ribbon_menu(
        &self,
        caption: &str,
        range: RangeInfo,
        callback: CallbackHandler,
    ) -> Result<ServiceResult> {
        let result = self
            .create_dynamic_ribbon_menu_raw(caption, range, Self::shared_endpoint())
            .await?;
        self.store_handler(
            "CreateDynamicRibbonMenu",
            result.menu_id.as_deref(),
            callback,
        );
        Ok(result)
    }

    /// Remove a ribbon menu, keeping any local handler.
    pub async fn destroy_ribbon_menu_raw(&self, menu_id: &str) -> Result<ServiceResult> {
        self.invoke(
            "DestroyRibbonMenu",
            &DestroyMenuArgs {
                menu_id: menu_id.to_string(),
            },
        )
        .await
    }

    /// Remove a ribbon menu and its handler.
    pub async fn destroy_ribbon_menu(&self, menu_id: &str) -> Result<ServiceResult> {
        let result = self.destroy_ribbon_menu_raw(menu_id).await?;
        self.router.remove(menu_id);
        Ok(result)
    }

    // -- Custom task panes --

    /// Create or update a custom task pane with an explicit
    /// [`SubscriptionInfo`]. No local handler is registered.
    ///
    /// The service nests this operation's outcome under a `result` key in
    /// the returned object.
    pub async fn create_or_update_ctp_raw(
        &self,
        range: RangeInfo,
        ctp_descriptor: CtpDescriptor,
        subscription_info: SubscriptionInfo,
    ) -> Result<ServiceResult> {
        let returned = self
            .invoke_raw(
                "CreateOrUpdateCTP",
                &CreateOrUpdateCtpArgs {
                    range,
                    ctp_descriptor,
                    subscription_info,
                },
            )
            .await?;

        let inner = match returned {
            Value::Object(mut map) => match map.remove("result") {
                Some(result) => result,
                None => Value::Object(map),
            },
            other => other,
        };
        Invocation::new(inner).decode()
    }

    /// Create or update a custom task pane; its button clicks fire the
    /// handler.
    ///
    /// The descriptor's own `id` is the correlation identifier. Buttons in
    /// the UI tree without an explicit callback endpoint are pointed at the
    /// shared endpoint before the call goes out.
    pub async fn create_or_update_ctp(
        &self,
        range: RangeInfo,
        mut ctp_descriptor: CtpDescriptor,
        callback: CallbackHandler,
    ) -> Result<ServiceResult> {
        let subscription_info = SubscriptionInfo {
            callback: interop_protocol::CallbackInfo {
                callback_id: Some(ctp_descriptor.id.clone()),
                ..interop_protocol::CallbackInfo::endpoint(XL_SERVICE_CALLBACK_ENDPOINT)
            },
            lifetime: None,
        };

        fill_button_endpoints(&mut ctp_descriptor.ui);

        let ctp_id = ctp_descriptor.id.clone();
        let result = self
            .create_or_update_ctp_raw(range, ctp_descriptor, subscription_info)
            .await?;
        if !ctp_id.is_empty() {
            self.router.insert(ctp_id, callback);
        }
        Ok(result)
    }

    // -- Comments, styling, formatting --

    /// Attach a comment to a range.
    pub async fn write_comment(&self, range: RangeInfo, comment: &str) -> Result<ServiceResult> {
        self.invoke(
            "WriteComment",
            &WriteCommentArgs {
                range,
                comment: comment.to_string(),
            },
        )
        .await
    }

    /// Remove all comments from a range.
    pub async fn clear_comments(&self, range: RangeInfo) -> Result<ServiceResult> {
        self.invoke("ClearComments", &RangeArgs { range }).await
    }

    /// Apply background and foreground colors to a range.
    pub async fn apply_styles(
        &self,
        range: RangeInfo,
        background_color: &str,
        foreground_color: &str,
    ) -> Result<ServiceResult> {
        self.invoke(
            "ApplyStyles",
            &ApplyStylesArgs {
                range,
                background_color: background_color.to_string(),
                foreground_color: foreground_color.to_string(),
            },
        )
        .await
    }

    /// Apply the range's `number_format` to its cells.
    pub async fn set_range_format(&self, range: RangeInfo) -> Result<ServiceResult> {
        self.invoke("SetRangeFormat", &RangeArgs { range }).await
    }
}

/// Point every Button node without an explicit callback endpoint at the
/// shared endpoint, recursively.
fn fill_button_endpoints(ui: &mut UiDescriptor) {
    if ui.ui_type == UiType::Button {
        let missing = ui
            .callback
            .as_ref()
            .map_or(true, |cb| cb.callback_endpoint.is_empty());
        if missing {
            let mut callback = ui.callback.take().unwrap_or_default();
            callback.callback_endpoint = XL_SERVICE_CALLBACK_ENDPOINT.to_string();
            ui.callback = Some(callback);
        }
    }
    if let Some(children) = ui.children.as_mut() {
        for child in children {
            fill_button_endpoints(child);
        }
    }
}
