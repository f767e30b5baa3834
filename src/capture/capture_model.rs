use serde::Serialize;

use crate::element::element_model::UIElement;
use crate::element::extractor::Strategy;
use crate::error::HierarchyError;
use crate::tree::classifier::ClassifierConfig;
use crate::tree::optimizer::DEFAULT_MAX_DEPTH;
use crate::tree::tree_model::{RawNode, ScreenRect};

/// Where a capture's screen dimensions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenSource {
    /// Supplied by the caller (device bridge or CLI flag)
    Device,
    /// Derived from the largest bounds in the dump
    Inferred,
    /// Neither available: 1080x1920
    Fallback,
}

#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub classifier: ClassifierConfig,
    pub max_depth: usize,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Result of processing one hierarchy dump.
#[derive(Debug, Clone)]
pub struct Capture {
    /// sha1 of the dump, for correlating traces of the same screen
    pub fingerprint: String,
    pub screen: ScreenRect,
    pub screen_source: ScreenSource,
    pub strategy: Strategy,
    pub raw_node_count: usize,
    pub optimized_tree: Option<RawNode>,
    pub elements: Vec<UIElement>,
    /// Set when the dump could not be read or optimization failed
    pub warning: Option<String>,
}

impl Capture {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn optimized_node_count(&self) -> usize {
        self.optimized_tree.as_ref().map_or(0, RawNode::node_count)
    }

    pub fn element(&self, index: usize) -> Result<&UIElement, HierarchyError> {
        self.elements
            .get(index)
            .ok_or(HierarchyError::ElementNotFound(index))
    }
}
