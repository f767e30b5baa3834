use std::collections::HashMap;

use serde::Serialize;

use crate::element::element_model::UIElement;
use crate::tree::bounds::parse_bounds;
use crate::tree::classifier::{
    ClassifierConfig, is_excluded_resource, is_meaningful, should_include,
};
use crate::tree::optimizer::OptimizationResult;
use crate::tree::tree_model::{
    ATTR_BOUNDS, ATTR_CONTENT_DESC, ATTR_HINT, ATTR_HINT_TEXT, ATTR_RESOURCE_ID, ATTR_TEXT,
    RawNode, ScreenRect,
};

/// Which walk produced a capture's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    OptimizedTree,
    RawHierarchy,
    /// The dump could not be read at all
    None,
}

/// The tree to walk, tagged with how it was obtained.
#[derive(Debug, Clone, Copy)]
pub enum ExtractionMode<'a> {
    Optimized(&'a RawNode),
    Raw(&'a RawNode),
}

impl<'a> ExtractionMode<'a> {
    /// Optimized walk when optimization produced a tree, raw fallback otherwise.
    pub fn select(result: &'a OptimizationResult, raw: &'a RawNode) -> Self {
        match result.tree() {
            Some(tree) => ExtractionMode::Optimized(tree),
            None => ExtractionMode::Raw(raw),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            ExtractionMode::Optimized(_) => Strategy::OptimizedTree,
            ExtractionMode::Raw(_) => Strategy::RawHierarchy,
        }
    }
}

pub fn extract_elements(
    mode: ExtractionMode,
    screen: ScreenRect,
    config: &ClassifierConfig,
) -> Vec<UIElement> {
    let mut elements = match mode {
        ExtractionMode::Optimized(tree) => walk_optimized(tree, config),
        ExtractionMode::Raw(tree) => walk_raw(tree, screen, config),
    };

    renumber(&mut elements);
    log::debug!(
        "extracted {} elements via {:?}",
        elements.len(),
        mode.strategy()
    );
    elements
}

/// Final pass: indices become positions, 0..N-1.
pub fn renumber(elements: &mut [UIElement]) {
    for (position, element) in elements.iter_mut().enumerate() {
        element.index = position;
    }
}

// ============================================================================
// Optimized-tree walk
// ============================================================================

/// Pre-order walk. Each node's path is its parent's path plus `/Class[n]`,
/// where n counts earlier siblings with the same class.
fn walk_optimized(root: &RawNode, config: &ClassifierConfig) -> Vec<UIElement> {
    let mut elements = Vec::new();
    let mut stack: Vec<(&RawNode, String)> = vec![(root, format!("//{}[0]", root.class_name()))];

    while let Some((node, xpath)) = stack.pop() {
        let wanted = node.attr_is_true("clickable")
            || node.attr_is_true("focused")
            || node.attr_is_true("focusable")
            || is_meaningful(node, config);

        let mut sibling_counts: HashMap<&str, usize> = HashMap::new();
        let children: Vec<(&RawNode, String)> = node
            .children
            .iter()
            .map(|child| {
                let class = child.class_name();
                let n = sibling_counts.entry(class).or_insert(0);
                let path = format!("{}/{}[{}]", xpath, class, n);
                *n += 1;
                (child, path)
            })
            .collect();

        if wanted {
            let element = build_element(node, elements.len(), xpath);
            if element.is_visible() {
                elements.push(element);
            }
        }

        stack.extend(children.into_iter().rev());
    }

    elements
}

// ============================================================================
// Raw-hierarchy fallback
// ============================================================================

/// Flat pre-order walk over every node below the root, with positional paths.
/// Excluded system chrome is skipped together with its subtree.
fn walk_raw(root: &RawNode, screen: ScreenRect, config: &ClassifierConfig) -> Vec<UIElement> {
    let mut elements = Vec::new();
    let mut stack: Vec<&RawNode> = root.children.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if is_excluded_resource(node, config) {
            continue;
        }

        let wanted = node.attr_is_true("clickable")
            || node.attr_is_true("focusable")
            || node.has_text_attr(ATTR_TEXT)
            || node.has_text_attr(ATTR_CONTENT_DESC)
            || node.has_text_attr(ATTR_HINT);

        if wanted && should_include(node, screen, config) {
            let xpath = format!("/hierarchy/node[{}]", elements.len());
            let element = build_element(node, elements.len(), xpath);
            if element.is_visible() {
                elements.push(element);
            }
        }

        stack.extend(node.children.iter().rev());
    }

    elements
}

fn build_element(node: &RawNode, index: usize, xpath: String) -> UIElement {
    let hint = match node.attr_or_empty(ATTR_HINT) {
        "" => node.attr_or_empty(ATTR_HINT_TEXT),
        hint => hint,
    };

    UIElement {
        index,
        class_name: node.class_name().to_string(),
        bounds: parse_bounds(node.attr_or_empty(ATTR_BOUNDS)),
        text: node.attr_or_empty(ATTR_TEXT).to_string(),
        content_desc: node.attr_or_empty(ATTR_CONTENT_DESC).to_string(),
        resource_id: node.attr_or_empty(ATTR_RESOURCE_ID).to_string(),
        hint: hint.to_string(),
        clickable: node.attr_is_true("clickable"),
        checkable: node.attr_is_true("checkable"),
        checked: node.attr_is_true("checked"),
        focusable: node.attr_is_true("focusable"),
        focused: node.attr_is_true("focused"),
        scrollable: node.attr_is_true("scrollable"),
        selected: node.attr_is_true("selected"),
        enabled: node.attr("enabled") != Some("false"),
        xpath,
    }
}
