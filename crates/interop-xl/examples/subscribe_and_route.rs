//! Example: subscribe to a range and route a simulated notification.
//!
//! There is no platform to talk to here, so the example brings its own
//! in-memory `InteropApi`: invocations answer with canned results, and the
//! "platform" end of the shared callback endpoint is driven by hand.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use interop_client::{EndpointHandler, InteropApi, Invocation, Result};
use interop_protocol::RangeInfo;
use interop_xl::{XlService, XL_SERVICE_CALLBACK_ENDPOINT};

#[derive(Default)]
struct LoopbackInterop {
    endpoints: Mutex<HashMap<String, EndpointHandler>>,
}

#[async_trait]
impl InteropApi for LoopbackInterop {
    async fn invoke(&self, method: &str, args: Value) -> Result<Invocation> {
        println!("-> invoke {method}: {args}");
        let returned = match method {
            "IO.XL.Subscribe" => json!({ "success": true, "subscriptionId": "sub-1" }),
            _ => json!({ "success": true }),
        };
        Ok(Invocation::new(returned))
    }

    async fn register(&self, endpoint: &str, handler: EndpointHandler) -> Result<()> {
        println!("-> register endpoint {endpoint}");
        self.endpoints
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), handler);
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let interop = Arc::new(LoopbackInterop::default());
    let xl = XlService::connect(interop.clone()).await?;

    let range = RangeInfo::new("Book1", "Sheet1", "A1:B5");
    let result = xl
        .subscribe(
            range,
            Arc::new(|event| {
                println!("<- notification for {:?}: {:?}", event.subscription_id, event.payload);
            }),
        )
        .await?;
    println!("subscribed as {:?}", result.subscription_id);

    // Pretend the range changed: the platform calls the shared endpoint.
    let handler = interop
        .endpoints
        .lock()
        .unwrap()
        .get(XL_SERVICE_CALLBACK_ENDPOINT)
        .cloned()
        .unwrap();
    handler(json!({
        "subscriptionId": "sub-1",
        "origin": "Sheet1!A1",
        "data": [["x", 42]],
    }));

    xl.destroy_subscription("sub-1").await?;
    Ok(())
}
