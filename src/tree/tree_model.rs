use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ATTR_BOUNDS: &str = "bounds";
pub const ATTR_CLASS: &str = "class";
pub const ATTR_RESOURCE_ID: &str = "resource-id";
pub const ATTR_TEXT: &str = "text";
pub const ATTR_CONTENT_DESC: &str = "content-desc";
pub const ATTR_HINT: &str = "hint";
pub const ATTR_HINT_TEXT: &str = "hintText";

/// One node of a device hierarchy dump, independent of the parser that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawNode {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

impl RawNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RawNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attribute value, or "" when absent.
    pub fn attr_or_empty(&self, key: &str) -> &str {
        self.attr(key).unwrap_or("")
    }

    /// Boolean attributes only count when literally "true".
    pub fn attr_is_true(&self, key: &str) -> bool {
        self.attr(key) == Some("true")
    }

    /// Present and non-blank after trimming.
    pub fn has_text_attr(&self, key: &str) -> bool {
        self.attr(key).is_some_and(|v| !v.trim().is_empty())
    }

    /// Class name used for element naming and XPath segments: `class`, else the tag.
    pub fn class_name(&self) -> &str {
        match self.attr(ATTR_CLASS) {
            Some(class) if !class.is_empty() => class,
            _ => &self.tag,
        }
    }

    /// Same node without its children.
    pub fn shallow_copy(&self) -> RawNode {
        RawNode {
            tag: self.tag.clone(),
            attributes: self.attributes.clone(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Levels in this subtree; a lone node has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}

/// Axis-aligned rectangle, serialized as `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Bounds {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds { x1: 0, y1: 0, x2: 0, y2: 0 };

    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Zero or negative area.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn center(&self) -> (i32, i32) {
        let cx = (self.x1 as i64 + self.x2 as i64).div_euclid(2) as i32;
        let cy = (self.y1 as i64 + self.y2 as i64).div_euclid(2) as i32;
        (cx, cy)
    }

    /// True when no part of the rectangle overlaps `[0,0,width,height]`.
    pub fn is_outside(&self, screen: ScreenRect) -> bool {
        self.x1 >= screen.width || self.y1 >= screen.height || self.x2 <= 0 || self.y2 <= 0
    }

    pub fn to_array(self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl From<[i32; 4]> for Bounds {
    fn from(v: [i32; 4]) -> Self {
        Bounds::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Bounds> for [i32; 4] {
    fn from(b: Bounds) -> Self {
        b.to_array()
    }
}

/// Device screen dimensions, passed explicitly to every call that filters by geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    /// Used when neither the device bridge nor the dump provides a size.
    pub const FALLBACK: ScreenRect = ScreenRect {
        width: 1080,
        height: 1920,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for ScreenRect {
    fn default() -> Self {
        Self::FALLBACK
    }
}
