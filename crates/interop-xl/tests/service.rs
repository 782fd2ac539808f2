//! Integration tests for `XlService` against an in-memory platform fake.
//!
//! The fake records every invocation, returns scripted `returned` objects
//! per method, and lets a test fire the registered callback endpoint by
//! hand — close enough to the platform to exercise the full subscription
//! lifecycle without one.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use interop_client::{EndpointHandler, InteropApi, InteropError, Invocation, Result};
use interop_protocol::{
    CallbackEvent, CallbackInfo, CtpDescriptor, RangeInfo, SaveConflictResolution, UiDescriptor,
    UiType,
};
use interop_xl::{XlService, XL_SERVICE_CALLBACK_ENDPOINT};

#[derive(Default)]
struct FakeInterop {
    invocations: Mutex<Vec<(String, Value)>>,
    results: Mutex<HashMap<String, Value>>,
    endpoints: Mutex<HashMap<String, EndpointHandler>>,
    reject_registration: AtomicBool,
}

impl FakeInterop {
    fn stub(&self, method: &str, returned: Value) {
        self.results.lock().unwrap().insert(method.to_string(), returned);
    }

    fn invocations(&self) -> Vec<(String, Value)> {
        self.invocations.lock().unwrap().clone()
    }

    fn last_invocation(&self) -> (String, Value) {
        self.invocations().last().cloned().expect("no invocations recorded")
    }

    /// Deliver a payload to a registered endpoint, as the platform would.
    fn fire(&self, endpoint: &str, payload: Value) {
        let handler = self
            .endpoints
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .expect("endpoint not registered");
        handler(payload);
    }

    fn has_endpoint(&self, endpoint: &str) -> bool {
        self.endpoints.lock().unwrap().contains_key(endpoint)
    }
}

#[async_trait]
impl InteropApi for FakeInterop {
    async fn invoke(&self, method: &str, args: Value) -> Result<Invocation> {
        self.invocations
            .lock()
            .unwrap()
            .push((method.to_string(), args));
        let returned = self
            .results
            .lock()
            .unwrap()
            .get(method)
            .cloned()
            .unwrap_or(Value::Null);
        Ok(Invocation::new(returned))
    }

    async fn register(&self, endpoint: &str, handler: EndpointHandler) -> Result<()> {
        if self.reject_registration.load(Ordering::SeqCst) {
            return Err(InteropError::registration(endpoint, "rejected by test"));
        }
        self.endpoints
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), handler);
        Ok(())
    }
}

async fn connect(fake: &Arc<FakeInterop>) -> XlService<FakeInterop> {
    XlService::connect(fake.clone()).await.expect("connect failed")
}

fn collecting_handler() -> (interop_client::CallbackHandler, Arc<Mutex<Vec<CallbackEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let handler: interop_client::CallbackHandler = Arc::new(move |event: &CallbackEvent| {
        sink.lock().unwrap().push(event.clone());
    });
    (handler, events)
}

fn range() -> RangeInfo {
    RangeInfo::new("Book1", "Sheet1", "A1:B5")
}

#[tokio::test]
async fn connect_registers_the_shared_endpoint_once() {
    let fake = Arc::new(FakeInterop::default());
    let _xl = connect(&fake).await;
    assert!(fake.has_endpoint(XL_SERVICE_CALLBACK_ENDPOINT));
    assert!(fake.invocations().is_empty());
}

#[tokio::test]
async fn connect_fails_when_endpoint_registration_is_rejected() {
    let fake = Arc::new(FakeInterop::default());
    fake.reject_registration.store(true, Ordering::SeqCst);
    let err = XlService::connect(fake).await;
    assert!(matches!(
        err,
        Err(InteropError::RegistrationFailed { .. })
    ));
}

#[tokio::test]
async fn subscribe_invokes_the_namespaced_method_with_wire_shape() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;
    fake.stub("IO.XL.Subscribe", json!({ "subscriptionId": "sub-1" }));

    let (handler, _) = collecting_handler();
    xl.subscribe(range(), handler).await.unwrap();

    let (method, args) = fake.last_invocation();
    assert_eq!(method, "IO.XL.Subscribe");
    assert_eq!(
        args,
        json!({
            "range": {
                "workbook": "Book1",
                "worksheet": "Sheet1",
                "range": "A1:B5",
            },
            "subscriptionInfo": {
                "callbackEndpoint": XL_SERVICE_CALLBACK_ENDPOINT,
            },
        })
    );
}

#[tokio::test]
async fn subscribe_routes_notifications_to_the_callback() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;
    fake.stub(
        "IO.XL.Subscribe",
        json!({ "success": true, "subscriptionId": "sub-1" }),
    );

    let (handler, events) = collecting_handler();
    let result = xl.subscribe(range(), handler).await.unwrap();
    assert_eq!(result.subscription_id.as_deref(), Some("sub-1"));
    assert!(xl.router().contains("sub-1"));

    let payload = json!({
        "subscriptionId": "sub-1",
        "origin": "Sheet1!A1",
        "data": [[1, 2]],
    });
    fake.fire(XL_SERVICE_CALLBACK_ENDPOINT, payload.clone());

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(serde_json::to_value(&events[0]).unwrap(), payload);
}

#[tokio::test]
async fn subscribe_without_identifier_keeps_the_registry_unchanged() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;
    fake.stub("IO.XL.Subscribe", json!({ "success": true }));

    let (handler, events) = collecting_handler();
    let result = xl.subscribe(range(), handler).await.unwrap();

    // The call itself succeeds; the registration is reported, not thrown.
    assert!(result.is_success());
    assert!(xl.router().is_empty());
    assert!(events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_invocation_stores_no_handler() {
    struct FailingInterop;

    #[async_trait]
    impl InteropApi for FailingInterop {
        async fn invoke(&self, method: &str, _args: Value) -> Result<Invocation> {
            Err(InteropError::invocation(method, "service offline"))
        }

        async fn register(&self, _endpoint: &str, _handler: EndpointHandler) -> Result<()> {
            Ok(())
        }
    }

    let xl = XlService::connect(Arc::new(FailingInterop)).await.unwrap();
    let (handler, _) = collecting_handler();
    let err = xl.subscribe(range(), handler).await;
    assert!(matches!(err, Err(InteropError::InvocationFailed { .. })));
    assert!(xl.router().is_empty());
}

#[tokio::test]
async fn destroy_subscription_removes_the_handler_after_confirmation() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;
    fake.stub("IO.XL.Subscribe", json!({ "subscriptionId": "sub-1" }));
    fake.stub("IO.XL.DestroySubscription", json!({ "success": true }));

    let (handler, events) = collecting_handler();
    xl.subscribe(range(), handler).await.unwrap();
    xl.destroy_subscription("sub-1").await.unwrap();

    assert!(xl.router().is_empty());
    // A straggler notification after teardown is dropped quietly.
    fake.fire(
        XL_SERVICE_CALLBACK_ENDPOINT,
        json!({ "subscriptionId": "sub-1" }),
    );
    assert!(events.lock().unwrap().is_empty());

    // Destroying again is a remote round-trip plus a local no-op.
    xl.destroy_subscription("sub-1").await.unwrap();
}

#[tokio::test]
async fn notifications_for_unknown_subscriptions_are_dropped() {
    let fake = Arc::new(FakeInterop::default());
    let _xl = connect(&fake).await;

    // Nothing subscribed yet — e.g. a notification racing the local insert.
    fake.fire(
        XL_SERVICE_CALLBACK_ENDPOINT,
        json!({ "subscriptionId": "not-yet-inserted" }),
    );
    fake.fire(XL_SERVICE_CALLBACK_ENDPOINT, json!({ "noId": true }));
}

#[tokio::test]
async fn context_menu_clicks_route_by_menu_id() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;
    fake.stub("IO.XL.CreateContextMenu", json!({ "menuId": "menu-9" }));
    fake.stub("IO.XL.DestroyContextMenu", json!({ "success": true }));

    let (handler, events) = collecting_handler();
    let result = xl
        .create_context_menu(
            "Send",
            vec!["io".into(), "actions".into()],
            range(),
            handler,
        )
        .await
        .unwrap();
    assert_eq!(result.menu_id.as_deref(), Some("menu-9"));

    let (_, args) = fake.invocations()[0].clone();
    assert_eq!(args["caption"], json!("Send"));
    assert_eq!(args["menuPath"], json!(["io", "actions"]));

    fake.fire(
        XL_SERVICE_CALLBACK_ENDPOINT,
        json!({ "subscriptionId": "menu-9", "caption": "Send" }),
    );
    assert_eq!(events.lock().unwrap().len(), 1);

    xl.destroy_context_menu("menu-9").await.unwrap();
    assert!(xl.router().is_empty());
}

#[tokio::test]
async fn ribbon_menu_lifecycle_mirrors_context_menus() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;
    fake.stub(
        "IO.XL.CreateDynamicRibbonMenu",
        json!({ "menuId": "ribbon-1" }),
    );
    fake.stub("IO.XL.DestroyRibbonMenu", json!({ "success": true }));

    let (handler, _) = collecting_handler();
    xl.create_dynamic_ribbon_menu("Another", range(), handler)
        .await
        .unwrap();
    assert!(xl.router().contains("ribbon-1"));

    xl.destroy_ribbon_menu("ribbon-1").await.unwrap();
    assert!(!xl.router().contains("ribbon-1"));
}

#[tokio::test]
async fn ctp_registers_under_descriptor_id_and_unwraps_nested_result() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;
    fake.stub(
        "IO.XL.CreateOrUpdateCTP",
        json!({ "result": { "ctpHostId": "host-3", "success": true } }),
    );

    let descriptor = CtpDescriptor {
        id: "pane-1".into(),
        title: "Orders".into(),
        visible: Some(true),
        ui: UiDescriptor {
            ui_type: UiType::Panel,
            children: Some(vec![UiDescriptor {
                ui_type: UiType::Button,
                id: Some("refresh".into()),
                text: Some("Refresh".into()),
                ..UiDescriptor::default()
            }]),
            ..UiDescriptor::default()
        },
    };

    let (handler, events) = collecting_handler();
    let result = xl
        .create_or_update_ctp(range(), descriptor, handler)
        .await
        .unwrap();

    assert_eq!(result.ctp_host_id.as_deref(), Some("host-3"));
    assert!(xl.router().contains("pane-1"));

    let (_, args) = fake.last_invocation();
    assert_eq!(
        args["subscriptionInfo"],
        json!({
            "callbackEndpoint": XL_SERVICE_CALLBACK_ENDPOINT,
            "callbackId": "pane-1",
        })
    );
    // The button without an endpoint was pointed at the shared one.
    assert_eq!(
        args["ctpDescriptor"]["ui"]["children"][0]["callback"]["callbackEndpoint"],
        json!(XL_SERVICE_CALLBACK_ENDPOINT)
    );

    fake.fire(
        XL_SERVICE_CALLBACK_ENDPOINT,
        json!({ "subscriptionId": "pane-1", "id": "refresh" }),
    );
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_workbook_and_table_operations_use_wire_names() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;

    xl.create_workbook("Book3", "Sheet1", SaveConflictResolution::LocalSessionChanges)
        .await
        .unwrap();
    let (method, args) = fake.last_invocation();
    assert_eq!(method, "IO.XL.CreateWorkbook");
    assert_eq!(args["workbookFile"], json!("Book3"));
    assert_eq!(
        args["saveConflictResolution"],
        json!("xlLocalSessionChanges")
    );

    xl.write_table_rows(range(), "Users", None, vec![vec![json!("3"), json!("New User")]])
        .await
        .unwrap();
    let (method, args) = fake.last_invocation();
    assert_eq!(method, "IO.XL.WriteTableRows");
    assert_eq!(args["tableName"], json!("Users"));
    // None appends — sent as an explicit null, not omitted.
    assert_eq!(args["rowPosition"], Value::Null);

    xl.read_table_rows(range(), "Users", 1, Some(10)).await.unwrap();
    let (method, args) = fake.last_invocation();
    assert_eq!(method, "IO.XL.ReadTableRows");
    assert_eq!(args["fromRow"], json!(1));
    assert_eq!(args["rowsToRead"], json!(10));
}

#[tokio::test]
async fn custom_namespace_prefixes_every_method() {
    let fake = Arc::new(FakeInterop::default());
    let xl = XlService::connect_with_namespace(fake.clone(), "Custom.XL.")
        .await
        .unwrap();

    xl.read(range()).await.unwrap();
    let (method, _) = fake.last_invocation();
    assert_eq!(method, "Custom.XL.Read");
}

#[tokio::test]
async fn raw_variants_do_not_touch_the_registry() {
    let fake = Arc::new(FakeInterop::default());
    let xl = connect(&fake).await;
    fake.stub("IO.XL.Subscribe", json!({ "subscriptionId": "sub-raw" }));

    xl.subscribe_raw(
        range(),
        interop_protocol::SubscriptionInfo {
            callback: CallbackInfo::endpoint("someOtherEndpoint"),
            lifetime: None,
        },
    )
    .await
    .unwrap();

    assert!(xl.router().is_empty());
}
