use crate::tree::bounds::try_parse_bounds;
use crate::tree::tree_model::{ATTR_BOUNDS, RawNode, ScreenRect};

/// Screen rectangle implied by the furthest right and bottom edges in the dump.
pub fn infer_screen_size(tree: &RawNode) -> Option<ScreenRect> {
    let mut max_x: Option<i32> = None;
    let mut max_y: Option<i32> = None;

    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        if let Some(raw) = node.attr(ATTR_BOUNDS) {
            if let Ok(bounds) = try_parse_bounds(raw) {
                max_x = Some(max_x.map_or(bounds.x2, |m| m.max(bounds.x2)));
                max_y = Some(max_y.map_or(bounds.y2, |m| m.max(bounds.y2)));
            }
        }
        stack.extend(node.children.iter());
    }

    match (max_x, max_y) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            log::debug!("inferred screen size {}x{} from bounds", width, height);
            Some(ScreenRect::new(width, height))
        }
        _ => None,
    }
}
