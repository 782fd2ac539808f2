//! Callback routing types shared by every subscription-style operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where the platform should deliver notifications for a subscription.
///
/// The SDK registers one shared endpoint and passes its name here; the
/// platform echoes a correlation identifier back in each notification so the
/// client can route it to the right local handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackInfo {
    /// Name of the registered callback endpoint to invoke.
    pub callback_endpoint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_instance: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_app: Option<String>,

    /// Caller-chosen correlation identifier. Most operations let the remote
    /// side generate one instead; custom task panes supply their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
}

impl CallbackInfo {
    pub fn endpoint(name: impl Into<String>) -> Self {
        Self {
            callback_endpoint: name.into(),
            ..Self::default()
        }
    }
}

/// Which registered instances of the endpoint receive a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    All,
    Any,
}

/// [`CallbackInfo`] plus the lifetime of the subscription itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInfo {
    #[serde(flatten)]
    pub callback: CallbackInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<Lifetime>,
}

impl SubscriptionInfo {
    pub fn endpoint(name: impl Into<String>) -> Self {
        Self {
            callback: CallbackInfo::endpoint(name),
            lifetime: None,
        }
    }
}

/// How long the remote side keeps a subscription alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifetime {
    None,
    /// Tied to the lifetime of the client's platform connection.
    GlueInstance,
    Forever,
    ExcelSession,
}

/// An inbound notification delivered to the shared callback endpoint.
///
/// The correlation identifier is extracted for routing; the rest of the
/// payload is preserved untouched so a handler sees exactly what the
/// platform sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}

impl CallbackEvent {
    /// Build an event carrying only a correlation identifier.
    pub fn for_subscription(id: impl Into<String>) -> Self {
        Self {
            subscription_id: Some(id.into()),
            payload: serde_json::Map::new(),
        }
    }
}
