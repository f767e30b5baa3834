use serde::{Deserialize, Serialize};

use crate::element::describe::to_ai_text;
use crate::tree::tree_model::Bounds;

/// One selectable element of a single capture. Indices are only meaningful within that capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UIElement {
    pub index: usize,
    pub class_name: String,
    pub bounds: Bounds,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub content_desc: String,
    #[serde(default)]
    pub resource_id: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub clickable: bool,
    #[serde(default)]
    pub checkable: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub focusable: bool,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub scrollable: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub xpath: String,
}

fn default_enabled() -> bool {
    true
}

impl UIElement {
    pub fn center_x(&self) -> i32 {
        self.bounds.center().0
    }

    pub fn center_y(&self) -> i32 {
        self.bounds.center().1
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn is_visible(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }

    pub fn to_ai_text(&self) -> String {
        to_ai_text(self)
    }

    /// Case-insensitive substring match against text, content-desc and hint.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.text, &self.content_desc, &self.hint]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
