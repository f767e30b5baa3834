use std::path::PathBuf;

use ui_hierarchy::tree::tree_model::{RawNode, ScreenRect};

pub const PHONE: ScreenRect = ScreenRect {
    width: 1080,
    height: 1920,
};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

/// Bare node with a tag and bounds, no other attributes.
pub fn node(tag: &str, bounds: &str) -> RawNode {
    RawNode::new(tag).with_attr("bounds", bounds)
}

pub fn text_node(tag: &str, text: &str, bounds: &str) -> RawNode {
    node(tag, bounds).with_attr("text", text)
}

/// `depth` meaningless wrappers around `leaf`, all sharing the leaf's bounds.
pub fn wrapper_chain(depth: usize, leaf: RawNode) -> RawNode {
    let bounds = leaf.attr("bounds").unwrap_or("[0,0][100,100]").to_string();
    (0..depth).fold(leaf, |inner, i| {
        node(&format!("Wrapper{}", i), &bounds).with_child(inner)
    })
}

/// A unique scratch path under the system temp dir.
pub fn temp_path(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("ui-hierarchy-{}-{}", std::process::id(), nanos))
        .join(name)
}
