//! The `InteropApi` trait — the black-box boundary to the platform.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Handler installed on a named callback endpoint.
///
/// The platform invokes the endpoint with a raw JSON payload; anything
/// beyond that (routing, decoding) is the registrant's business.
pub type EndpointHandler = Arc<dyn Fn(Value) + Send + Sync>;

/// The two primitives the interop platform exposes to this SDK.
///
/// Implementations bind to a live platform connection. The SDK never sees
/// transport, framing or retry concerns — a failed call surfaces as an
/// error, nothing more.
#[async_trait]
pub trait InteropApi: Send + Sync {
    /// Invoke a named remote method with a JSON argument object.
    async fn invoke(&self, method: &str, args: Value) -> Result<Invocation>;

    /// Register a named callback endpoint.
    ///
    /// Registering the same name twice replaces the previous handler; the
    /// platform keys endpoints by name.
    async fn register(&self, endpoint: &str, handler: EndpointHandler) -> Result<()>;
}

/// The platform's answer to an invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The invoked method's result object. `Null` when the method returns
    /// nothing.
    pub returned: Value,
}

impl Invocation {
    pub fn new(returned: Value) -> Self {
        Self { returned }
    }

    /// Decode `returned` into a typed result.
    ///
    /// A `Null` result decodes to `T::default()` — void methods and
    /// all-optional result objects are interchangeable on this wire.
    pub fn decode<T>(self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.returned.is_null() {
            return Ok(T::default());
        }
        Ok(serde_json::from_value(self.returned)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_protocol::ServiceResult;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_null_yields_default() {
        let result: ServiceResult = Invocation::new(Value::Null).decode().unwrap();
        assert_eq!(result, ServiceResult::default());
    }

    #[test]
    fn decode_object_yields_typed_result() {
        let result: ServiceResult =
            Invocation::new(serde_json::json!({ "menuId": "menu-3" }))
                .decode()
                .unwrap();
        assert_eq!(result.menu_id.as_deref(), Some("menu-3"));
    }

    #[test]
    fn decode_rejects_non_object_payloads() {
        let err = Invocation::new(serde_json::json!(17)).decode::<ServiceResult>();
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn trait_objects_can_back_a_shared_connection() {
        struct Echo;

        #[async_trait]
        impl InteropApi for Echo {
            async fn invoke(&self, _method: &str, args: Value) -> Result<Invocation> {
                Ok(Invocation::new(args))
            }

            async fn register(&self, _endpoint: &str, _handler: EndpointHandler) -> Result<()> {
                Ok(())
            }
        }

        let api: Arc<dyn InteropApi> = Arc::new(Echo);
        let invocation = api
            .invoke("Ping", serde_json::json!({ "a": 1 }))
            .await
            .unwrap();
        assert_eq!(invocation.returned["a"], 1);
    }
}
