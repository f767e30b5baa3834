use crate::element::element_model::UIElement;

/// Exact match on text, content-desc or hint first; otherwise the first
/// case-insensitive substring match.
pub fn find_by_text<'a>(elements: &'a [UIElement], text: &str) -> Option<&'a UIElement> {
    elements
        .iter()
        .find(|el| el.text == text || el.content_desc == text || el.hint == text)
        .or_else(|| elements.iter().find(|el| el.matches_text(text)))
}

pub fn find_by_index(elements: &[UIElement], index: usize) -> Option<&UIElement> {
    elements.iter().find(|el| el.index == index)
}
