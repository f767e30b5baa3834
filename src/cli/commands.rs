use std::path::Path;

use chrono::Utc;

use crate::capture::capture_model::{Capture, CaptureOptions};
use crate::capture::pipeline::{
    dump_fingerprint, process_capture, process_tree, unreadable_capture,
};
use crate::element::describe::{element_list_text, tree_string};
use crate::element::search::find_by_text;
use crate::error::HierarchyError;
use crate::locator::store::LocatorStore;
use crate::tree::hierarchy_xml::{parse_hierarchy, parse_tree_json};
use crate::tree::tree_model::{RawNode, ScreenRect};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// extract subcommand
// ============================================================================

pub fn cmd_extract(
    input: &str,
    screen: Option<ScreenRect>,
    format: &str,
    options: &CaptureOptions,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let capture = load_capture(input, screen, options)?;
    tracer.log(&TraceEvent::for_capture("extract", &capture));

    let output = match format {
        "json" => serde_json::to_string_pretty(&capture.elements).map_err(|source| {
            HierarchyError::Json {
                context: "element list".into(),
                source,
            }
        })?,
        _ => format_capture_text(&capture),
    };

    println!("{}", output);
    Ok(())
}

/// Header line followed by one `[index] description` line per element.
pub fn format_capture_text(capture: &Capture) -> String {
    let mut out = format!(
        "{} elements found ({:?}, screen {}x{} {:?})",
        capture.elements.len(),
        capture.strategy,
        capture.screen.width,
        capture.screen.height,
        capture.screen_source
    );

    if let Some(warning) = &capture.warning {
        out.push_str(&format!("\nwarning: {}", warning));
    }

    if !capture.elements.is_empty() {
        out.push('\n');
        out.push_str(&element_list_text(&capture.elements));
    }

    out
}

// ============================================================================
// tree subcommand
// ============================================================================

pub fn cmd_tree(
    input: &str,
    screen: Option<ScreenRect>,
    raw: bool,
    options: &CaptureOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = load_tree(input)?;

    if raw {
        println!("{}", tree_string(&tree));
        return Ok(());
    }

    let capture = process_tree(&tree, screen, options);
    match &capture.optimized_tree {
        Some(optimized) => println!("{}", tree_string(optimized)),
        None => eprintln!(
            "Nothing left after optimization on a {}x{} screen",
            capture.screen.width, capture.screen.height
        ),
    }
    Ok(())
}

// ============================================================================
// find subcommand
// ============================================================================

/// Print the matching element; returns whether one was found.
pub fn cmd_find(
    input: &str,
    text: &str,
    screen: Option<ScreenRect>,
    options: &CaptureOptions,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let capture = load_capture(input, screen, options)?;
    let found = find_by_text(&capture.elements, text);

    let mut event = TraceEvent::for_capture("find", &capture);
    if let Some(el) = found {
        event = event.with_selected(el.to_ai_text());
    }
    tracer.log(&event);

    match found {
        Some(el) => {
            println!(
                "[{}] {} center=({}, {}) xpath={}",
                el.index,
                el.to_ai_text(),
                el.center_x(),
                el.center_y(),
                el.xpath
            );
            Ok(true)
        }
        None => {
            eprintln!("No element matches '{}'", text);
            Ok(false)
        }
    }
}

// ============================================================================
// save subcommand
// ============================================================================

pub fn cmd_save(
    input: &str,
    index: usize,
    name: &str,
    store_path: &str,
    screen: Option<ScreenRect>,
    options: &CaptureOptions,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let capture = load_capture(input, screen, options)?;
    let element = capture.element(index)?;

    let mut store = match std::fs::read_to_string(store_path) {
        Ok(content) => LocatorStore::from_json(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => LocatorStore::new(),
        Err(source) => {
            return Err(HierarchyError::Io {
                path: store_path.to_string(),
                source,
            }
            .into());
        }
    };

    let record = store.save_element(name, element, Utc::now())?;

    if let Some(parent) = Path::new(store_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| HierarchyError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }
    std::fs::write(store_path, store.to_json_pretty()?).map_err(|source| HierarchyError::Io {
        path: store_path.to_string(),
        source,
    })?;

    tracer.log(&TraceEvent::for_capture("save", &capture).with_selected(name));
    println!("Saved '{}' -> {} ({} locators)", name, record.description, store.len());
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Read an input file. `.json` files hold a serialized tree, anything else is an XML dump.
pub fn load_capture(
    input: &str,
    screen: Option<ScreenRect>,
    options: &CaptureOptions,
) -> Result<Capture, HierarchyError> {
    let content = read_input(input)?;

    if is_json_input(input) {
        // Unreadable JSON is a 0-element capture too, same as unreadable XML
        return Ok(match parse_tree_json(&content) {
            Ok(tree) => process_tree(&tree, screen, options),
            Err(e) => unreadable_capture(dump_fingerprint(&content), screen, &e),
        });
    }

    Ok(process_capture(&content, screen, options))
}

pub fn load_tree(input: &str) -> Result<RawNode, HierarchyError> {
    let content = read_input(input)?;
    if is_json_input(input) {
        parse_tree_json(&content)
    } else {
        parse_hierarchy(&content)
    }
}

fn read_input(input: &str) -> Result<String, HierarchyError> {
    std::fs::read_to_string(input).map_err(|source| HierarchyError::Io {
        path: input.to_string(),
        source,
    })
}

fn is_json_input(input: &str) -> bool {
    Path::new(input)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
