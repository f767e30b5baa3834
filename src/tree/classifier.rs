use serde::{Deserialize, Serialize};

use crate::tree::bounds::parse_bounds;
use crate::tree::tree_model::{ATTR_BOUNDS, ATTR_RESOURCE_ID, RawNode, ScreenRect};

/// Attribute sets and exclusions that decide which nodes carry information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_text_attributes")]
    pub text_attributes: Vec<String>,

    #[serde(default = "default_bool_attributes")]
    pub bool_attributes: Vec<String>,

    #[serde(default = "default_excluded_resource_ids")]
    pub excluded_resource_ids: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            text_attributes: default_text_attributes(),
            bool_attributes: default_bool_attributes(),
            excluded_resource_ids: default_excluded_resource_ids(),
        }
    }
}

fn default_text_attributes() -> Vec<String> {
    ["text", "content-desc", "hint", "hintText", "title", "accessibilityText"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_bool_attributes() -> Vec<String> {
    ["clickable", "checkable", "focusable", "selectable"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// System chrome: status bar and navigation bar containers
fn default_excluded_resource_ids() -> Vec<String> {
    [
        "status_bar_container",
        "status_bar_launch_animation_container",
        "navigationBarBackground",
        "navigation_bar",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn is_meaningful(node: &RawNode, config: &ClassifierConfig) -> bool {
    config
        .text_attributes
        .iter()
        .any(|attr| node.has_text_attr(attr))
        || config
            .bool_attributes
            .iter()
            .any(|attr| node.attr_is_true(attr))
}

pub fn is_excluded_resource(node: &RawNode, config: &ClassifierConfig) -> bool {
    let resource_id = node.attr_or_empty(ATTR_RESOURCE_ID);
    if resource_id.is_empty() {
        return false;
    }

    config
        .excluded_resource_ids
        .iter()
        .any(|excluded| resource_id.contains(excluded.as_str()))
}

pub fn should_include(node: &RawNode, screen: ScreenRect, config: &ClassifierConfig) -> bool {
    if is_excluded_resource(node, config) {
        return false;
    }

    let bounds = parse_bounds(node.attr_or_empty(ATTR_BOUNDS));
    if bounds.is_degenerate() {
        return false;
    }

    !bounds.is_outside(screen)
}

/// Whether this node or anything below it is meaningful. Stops at the first hit.
pub fn has_meaningful_descendant(node: &RawNode, config: &ClassifierConfig) -> bool {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if is_meaningful(current, config) {
            return true;
        }
        stack.extend(current.children.iter().rev());
    }
    false
}
