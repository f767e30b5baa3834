use pretty_assertions::assert_eq;

use ui_hierarchy::{
    error::HierarchyError,
    tree::{
        classifier::ClassifierConfig,
        optimizer::{OptimizationResult, optimize, optimize_with_limit},
        tree_model::RawNode,
    },
};

use crate::common::utils::{PHONE, node, text_node, wrapper_chain};

mod common;

fn optimized(tree: &RawNode) -> Option<RawNode> {
    optimize(tree, PHONE, &ClassifierConfig::default()).into_tree()
}

// =========================================================================
// Collapse rules
// =========================================================================

#[test]
fn single_wrapper_is_elided() {
    let tree = node("FrameLayout", "[0,0][1080,1920]")
        .with_child(text_node("TextView", "Hi", "[10,10][200,60]"));

    let result = optimized(&tree).expect("tree should survive");
    assert_eq!(result.tag, "TextView");
    assert_eq!(result.attr("text"), Some("Hi"));
    assert!(result.children.is_empty());
}

#[test]
fn grouping_container_kept_for_two_branches() {
    let tree = node("LinearLayout", "[0,0][1080,1920]")
        .with_child(
            node("View", "[0,0][540,100]")
                .with_child(text_node("TextView", "Left", "[0,0][540,100]")),
        )
        .with_child(
            node("View", "[540,0][1080,100]")
                .with_child(text_node("TextView", "Right", "[540,0][1080,100]")),
        );

    let result = optimized(&tree).expect("tree should survive");
    assert_eq!(result.tag, "LinearLayout");
    assert_eq!(result.children.len(), 2);
    assert_eq!(result.children[0].attr("text"), Some("Left"));
    assert_eq!(result.children[1].attr("text"), Some("Right"));
}

#[test]
fn meaningful_node_kept_without_children() {
    let tree = node("Button", "[0,0][100,100]")
        .with_attr("clickable", "true")
        .with_child(node("View", "[0,0][100,100]"));

    let result = optimized(&tree).expect("clickable node survives");
    assert_eq!(result.tag, "Button");
    assert!(result.children.is_empty(), "meaningless child pruned");
}

#[test]
fn meaningful_node_keeps_single_child() {
    // A meaningful parent is never replaced by its only child
    let tree = node("Card", "[0,0][500,500]")
        .with_attr("clickable", "true")
        .with_child(text_node("TextView", "Title", "[0,0][500,100]"));

    let result = optimized(&tree).unwrap();
    assert_eq!(result.tag, "Card");
    assert_eq!(result.children.len(), 1);
    assert_eq!(result.children[0].tag, "TextView");
}

#[test]
fn wrapper_chain_collapses_to_leaf() {
    for depth in [1, 2, 5, 40] {
        let tree = wrapper_chain(depth, text_node("TextView", "Leaf", "[0,0][100,100]"));
        let result = optimized(&tree).unwrap();
        assert_eq!(result.tag, "TextView", "depth {}", depth);
        assert!(result.children.is_empty());
    }
}

#[test]
fn meaningless_tree_is_empty() {
    let tree = node("FrameLayout", "[0,0][1080,1920]").with_child(node("View", "[0,0][10,10]"));
    let result = optimize(&tree, PHONE, &ClassifierConfig::default());
    assert!(matches!(result, OptimizationResult::Empty));
}

// =========================================================================
// Filtering
// =========================================================================

#[test]
fn status_bar_subtree_dropped() {
    let tree = node("FrameLayout", "[0,0][1080,1920]")
        .with_child(
            node("FrameLayout", "[0,0][1080,63]")
                .with_attr("resource-id", "com.android:id/status_bar_container")
                .with_child(text_node("TextView", "12:30", "[40,0][140,63]")),
        )
        .with_child(text_node("TextView", "Body", "[0,100][1080,200]"));

    let result = optimized(&tree).unwrap();
    assert_eq!(result.attr("text"), Some("Body"), "only the body survives and is promoted");
}

#[test]
fn zero_area_node_dropped() {
    let tree = node("FrameLayout", "[0,0][1080,1920]")
        .with_child(text_node("TextView", "Ghost", "[0,0][0,0]"))
        .with_child(text_node("TextView", "Real", "[0,0][100,100]"));

    let result = optimized(&tree).unwrap();
    assert_eq!(result.attr("text"), Some("Real"));
}

#[test]
fn zero_area_root_yields_nothing() {
    let tree = text_node("Button", "Login", "[0,0][0,0]");
    assert!(optimized(&tree).is_none());
}

#[test]
fn offscreen_child_dropped() {
    let tree = node("FrameLayout", "[0,0][1080,1920]")
        .with_child(text_node("TextView", "Offscreen", "[1200,0][1300,100]"))
        .with_child(text_node("TextView", "Visible", "[0,0][100,100]"));

    let result = optimized(&tree).unwrap();
    assert_eq!(result.attr("text"), Some("Visible"));
}

// =========================================================================
// Purity
// =========================================================================

#[test]
fn copies_keep_every_attribute() {
    let tree = node("Button", "[0,0][100,100]")
        .with_attr("text", "Go")
        .with_attr("package", "com.example")
        .with_attr("long-clickable", "true")
        .with_attr("index", "3");

    let result = optimized(&tree).unwrap();
    assert_eq!(result.attributes, tree.attributes);
}

#[test]
fn input_tree_is_untouched() {
    let tree = node("FrameLayout", "[0,0][1080,1920]")
        .with_child(node("View", "[0,0][10,10]"))
        .with_child(text_node("TextView", "Hi", "[10,10][200,60]"));
    let before = tree.clone();

    let _ = optimized(&tree);
    assert_eq!(tree, before);
}

#[test]
fn sibling_order_preserved() {
    let tree = node("LinearLayout", "[0,0][1080,1920]").with_children(
        ["a", "b", "c", "d"]
            .iter()
            .enumerate()
            .map(|(i, t)| {
                text_node("TextView", t, &format!("[0,{}][100,{}]", i * 100, i * 100 + 50))
            }),
    );

    let result = optimized(&tree).unwrap();
    let texts: Vec<&str> = result.children.iter().filter_map(|c| c.attr("text")).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d"]);
}

// =========================================================================
// Depth ceiling
// =========================================================================

#[test]
fn depth_ceiling_reports_failure() {
    let tree = wrapper_chain(20, text_node("TextView", "Leaf", "[0,0][100,100]"));
    let result = optimize_with_limit(&tree, PHONE, &ClassifierConfig::default(), 10);

    match result {
        OptimizationResult::Failed(HierarchyError::DepthExceeded { limit }) => {
            assert_eq!(limit, 10)
        }
        other => panic!("expected depth failure, got {:?}", other),
    }
}

#[test]
fn depth_ceiling_ignores_pruned_branches() {
    // The deep branch has nothing meaningful, so it is dropped before recursion
    let deep = wrapper_chain(50, node("View", "[0,0][100,100]"));
    let tree = node("FrameLayout", "[0,0][1080,1920]")
        .with_child(deep)
        .with_child(text_node("TextView", "Shallow", "[0,0][100,100]"));

    let result = optimize_with_limit(&tree, PHONE, &ClassifierConfig::default(), 5);
    assert!(result.is_optimized());
}
