use crate::element::element_model::UIElement;
use crate::tree::tree_model::{
    ATTR_CONTENT_DESC, ATTR_HINT, ATTR_HINT_TEXT, ATTR_RESOURCE_ID, ATTR_TEXT, RawNode,
};

// ============================================================================
// Element descriptions
// ============================================================================

/// Compact one-line description, e.g. `Button(text=Login, id=login_btn)`.
///
/// Attributes appear in a fixed order and only when set:
/// `text`, `hintText`, `content-desc`, `id`, `checked`, `focused`, `selected`,
/// and `enabled=false` for disabled elements.
pub fn to_ai_text(element: &UIElement) -> String {
    render(
        simple_class_name(&element.class_name),
        &DescribedState {
            text: &element.text,
            hint: &element.hint,
            content_desc: &element.content_desc,
            resource_id: &element.resource_id,
            checked: element.checked,
            focused: element.focused,
            selected: element.selected,
            enabled: element.enabled,
        },
    )
}

/// One `[index] description` line per element.
pub fn element_list_text(elements: &[UIElement]) -> String {
    elements
        .iter()
        .map(|el| format!("[{}] {}", el.index, to_ai_text(el)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indented outline of a tree, two spaces per level.
pub fn tree_string(root: &RawNode) -> String {
    let mut lines = Vec::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        lines.push(format!("{}{}", "  ".repeat(depth), describe_node(node)));
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    lines.join("\n")
}

fn describe_node(node: &RawNode) -> String {
    let hint = match node.attr_or_empty(ATTR_HINT) {
        "" => node.attr_or_empty(ATTR_HINT_TEXT),
        hint => hint,
    };

    render(
        simple_class_name(node.class_name()),
        &DescribedState {
            text: node.attr_or_empty(ATTR_TEXT),
            hint,
            content_desc: node.attr_or_empty(ATTR_CONTENT_DESC),
            resource_id: node.attr_or_empty(ATTR_RESOURCE_ID),
            checked: node.attr_is_true("checked"),
            focused: node.attr_is_true("focused"),
            selected: node.attr_is_true("selected"),
            enabled: node.attr("enabled") != Some("false"),
        },
    )
}

// ============================================================================
// Shared rendering
// ============================================================================

struct DescribedState<'a> {
    text: &'a str,
    hint: &'a str,
    content_desc: &'a str,
    resource_id: &'a str,
    checked: bool,
    focused: bool,
    selected: bool,
    enabled: bool,
}

fn render(class: &str, state: &DescribedState) -> String {
    let mut attrs = Vec::new();

    if !state.text.is_empty() {
        attrs.push(format!("text={}", state.text));
    }
    if !state.hint.is_empty() {
        attrs.push(format!("hintText={}", state.hint));
    }
    if !state.content_desc.is_empty() {
        attrs.push(format!("content-desc={}", state.content_desc));
    }

    let id = short_resource_id(state.resource_id);
    if !id.is_empty() {
        attrs.push(format!("id={}", id));
    }

    if state.checked {
        attrs.push("checked=true".to_string());
    }
    if state.focused {
        attrs.push("focused=true".to_string());
    }
    if state.selected {
        attrs.push("selected=true".to_string());
    }
    if !state.enabled {
        attrs.push("enabled=false".to_string());
    }

    format!("{}({})", class, attrs.join(", "))
}

/// `android.widget.Button` -> `Button`
pub fn simple_class_name(class_name: &str) -> &str {
    match class_name.rsplit('.').next() {
        Some(last) if !last.is_empty() => last,
        _ => class_name,
    }
}

/// `com.app:id/login` -> `id/login`
pub fn short_resource_id(resource_id: &str) -> &str {
    resource_id.rsplit(':').next().unwrap_or(resource_id)
}
