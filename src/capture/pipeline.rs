use crate::capture::capture_model::{Capture, CaptureOptions, ScreenSource};
use crate::element::extractor::{ExtractionMode, Strategy, extract_elements};
use crate::error::HierarchyError;
use crate::tree::hierarchy_xml::parse_hierarchy;
use crate::tree::optimizer::{OptimizationResult, optimize_with_limit};
use crate::tree::screen_size::infer_screen_size;
use crate::tree::tree_model::{RawNode, ScreenRect};

/// Parse, optimize and extract one XML dump. Never fails: an unreadable dump
/// yields a capture with no elements and a warning.
pub fn process_capture(
    dump: &str,
    screen: Option<ScreenRect>,
    options: &CaptureOptions,
) -> Capture {
    let fingerprint = dump_fingerprint(dump);

    match parse_hierarchy(dump) {
        Ok(tree) => run(&tree, fingerprint, screen, options),
        Err(e) => unreadable_capture(fingerprint, screen, &e),
    }
}

/// Zero-element capture for a dump that could not be read.
pub fn unreadable_capture(
    fingerprint: String,
    screen: Option<ScreenRect>,
    error: &HierarchyError,
) -> Capture {
    log::warn!("could not read hierarchy dump, 0 elements found: {}", error);
    let (screen, screen_source) = match screen {
        Some(s) => (s, ScreenSource::Device),
        None => (ScreenRect::FALLBACK, ScreenSource::Fallback),
    };

    Capture {
        fingerprint,
        screen,
        screen_source,
        strategy: Strategy::None,
        raw_node_count: 0,
        optimized_tree: None,
        elements: Vec::new(),
        warning: Some(error.to_string()),
    }
}

/// Same as `process_capture` for a tree that was already deserialized.
pub fn process_tree(
    tree: &RawNode,
    screen: Option<ScreenRect>,
    options: &CaptureOptions,
) -> Capture {
    let serialized = serde_json::to_string(tree).unwrap_or_default();
    run(tree, dump_fingerprint(&serialized), screen, options)
}

/// Explicit size first, then the size implied by the dump, then 1080x1920.
pub fn resolve_screen(tree: &RawNode, screen: Option<ScreenRect>) -> (ScreenRect, ScreenSource) {
    if let Some(screen) = screen {
        return (screen, ScreenSource::Device);
    }

    match infer_screen_size(tree) {
        Some(inferred) => (inferred, ScreenSource::Inferred),
        None => (ScreenRect::FALLBACK, ScreenSource::Fallback),
    }
}

pub fn dump_fingerprint(dump: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(dump.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn run(
    tree: &RawNode,
    fingerprint: String,
    screen: Option<ScreenRect>,
    options: &CaptureOptions,
) -> Capture {
    let (screen, screen_source) = resolve_screen(tree, screen);
    let result = optimize_with_limit(tree, screen, &options.classifier, options.max_depth);

    let warning = match &result {
        OptimizationResult::Failed(e) => Some(e.to_string()),
        _ => None,
    };

    log::debug!(
        "optimized {} nodes to {} on {}x{} ({:?})",
        tree.node_count(),
        result.tree().map_or(0, RawNode::node_count),
        screen.width,
        screen.height,
        screen_source
    );

    let mode = ExtractionMode::select(&result, tree);
    let strategy = mode.strategy();
    let elements = extract_elements(mode, screen, &options.classifier);

    if elements.is_empty() {
        log::info!("capture {} produced no elements", &fingerprint[..8]);
    }

    Capture {
        fingerprint,
        screen,
        screen_source,
        strategy,
        raw_node_count: tree.node_count(),
        optimized_tree: result.into_tree(),
        elements,
        warning,
    }
}
