use crate::error::HierarchyError;
use crate::tree::classifier::{
    ClassifierConfig, has_meaningful_descendant, is_meaningful, should_include,
};
use crate::tree::tree_model::{RawNode, ScreenRect};

/// Recursion ceiling for the optimizer. Device hierarchies rarely exceed a few dozen levels.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug)]
pub enum OptimizationResult {
    /// Pruned tree with at least one node
    Optimized(RawNode),

    /// Every node was filtered out or carried no information
    Empty,

    /// The tree could not be optimized (too deep)
    Failed(HierarchyError),
}

impl OptimizationResult {
    pub fn tree(&self) -> Option<&RawNode> {
        match self {
            OptimizationResult::Optimized(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn into_tree(self) -> Option<RawNode> {
        match self {
            OptimizationResult::Optimized(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn is_optimized(&self) -> bool {
        matches!(self, OptimizationResult::Optimized(_))
    }
}

pub fn optimize(
    node: &RawNode,
    screen: ScreenRect,
    config: &ClassifierConfig,
) -> OptimizationResult {
    optimize_with_limit(node, screen, config, DEFAULT_MAX_DEPTH)
}

pub fn optimize_with_limit(
    node: &RawNode,
    screen: ScreenRect,
    config: &ClassifierConfig,
    max_depth: usize,
) -> OptimizationResult {
    match optimize_node(node, screen, config, 0, max_depth) {
        Ok(Some(tree)) => OptimizationResult::Optimized(tree),
        Ok(None) => OptimizationResult::Empty,
        Err(e) => {
            log::warn!("tree optimization failed: {}", e);
            OptimizationResult::Failed(e)
        }
    }
}

/// Post-order collapse of one subtree. Returns a fresh copy; the input is never touched.
fn optimize_node(
    node: &RawNode,
    screen: ScreenRect,
    config: &ClassifierConfig,
    depth: usize,
    max_depth: usize,
) -> Result<Option<RawNode>, HierarchyError> {
    if depth > max_depth {
        return Err(HierarchyError::DepthExceeded { limit: max_depth });
    }

    if !should_include(node, screen, config) {
        return Ok(None);
    }

    if !has_meaningful_descendant(node, config) {
        return Ok(None);
    }

    let mut optimized_children = Vec::new();
    for child in &node.children {
        if let Some(optimized) = optimize_node(child, screen, config, depth + 1, max_depth)? {
            optimized_children.push(optimized);
        }
    }

    // Meaningful nodes survive even with no surviving children
    if is_meaningful(node, config) || optimized_children.len() > 1 {
        let mut copy = node.shallow_copy();
        copy.children = optimized_children;
        return Ok(Some(copy));
    }

    // A lone child replaces its wrapper. Chains collapse because the child
    // has already been through the same step.
    Ok(optimized_children.pop())
}
