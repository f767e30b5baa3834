use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::element::element_model::UIElement;

/// Entry of a project's locator store, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoredLocator {
    Xml(LocatorRecord),
    /// Screenshot-region locator written by the image tooling
    Image(ImageLocator),
}

/// Persisted snapshot of one element, referenced by name from automation scripts.
///
/// Stores written by older tooling may lack bounds and the interaction flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorRecord {
    pub class_name: String,
    #[serde(default)]
    pub bounds: Option<[i32; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default)]
    pub clickable: bool,
    #[serde(default)]
    pub focusable: bool,
    #[serde(default)]
    pub scrollable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    pub description: String,
    pub added_at: String,
}

/// Image locators are only carried through the store; fields this crate
/// does not know about are written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLocator {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub added_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocatorRecord {
    pub fn from_element(element: &UIElement, added_at: DateTime<Utc>) -> Self {
        Self {
            class_name: element.class_name.clone(),
            bounds: Some(element.bounds.to_array()),
            text: non_empty(&element.text),
            content_desc: non_empty(&element.content_desc),
            resource_id: non_empty(&element.resource_id),
            hint: non_empty(&element.hint),
            clickable: element.clickable,
            focusable: element.focusable,
            scrollable: element.scrollable,
            xpath: non_empty(&element.xpath),
            description: element.to_ai_text(),
            added_at: format_timestamp(added_at),
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
