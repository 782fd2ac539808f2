//! Custom task pane (CTP) descriptors.
//!
//! A CTP is a small declarative UI tree hosted by Excel. Buttons in the tree
//! carry [`CallbackInfo`] so clicks flow back through the shared callback
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::callback::CallbackInfo;

/// Top-level description of a custom task pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtpDescriptor {
    /// Caller-chosen pane identifier; doubles as the correlation identifier
    /// for button-click notifications.
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    pub ui: UiDescriptor,
}

/// One node of the CTP UI tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiDescriptor {
    #[serde(rename = "type")]
    pub ui_type: UiType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<CallbackInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<UiDescriptor>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<UiHorizontalAlignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<UiVerticalAlignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Thickness>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fore_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
}

/// Node kinds the pane host understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiType {
    #[default]
    Panel,
    Label,
    TextBox,
    Button,
    ScrollBox,
    Border,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiHorizontalAlignment {
    Left,
    Center,
    Right,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiVerticalAlignment {
    Top,
    Center,
    Bottom,
    Stretch,
}

/// Margins around a UI node, in device-independent pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}
