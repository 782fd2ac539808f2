//! Ribbon customization descriptors.

use serde::{Deserialize, Serialize};

use crate::callback::SubscriptionInfo;

/// One element of a custom ribbon layout (tab, group, control, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RibbonObject {
    #[serde(rename = "type")]
    pub object_type: RibbonObjectType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<SubscriptionInfo>,

    /// Child elements for container kinds (`Tab`, `Group`, `DynamicMenu`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Vec<RibbonObject>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_tip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_tip: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RibbonObjectType {
    #[default]
    Button,
    DynamicMenu,
    Separator,
    Group,
    Tab,
}
