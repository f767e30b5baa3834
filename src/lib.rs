//! Accessibility-tree optimization and element extraction for mobile UI automation.
//!
//! A raw hierarchy dump goes through four stages:
//! read (`tree::hierarchy_xml`), prune (`tree::optimizer`), extract
//! (`element::extractor`) and describe (`element::describe`).
//! `capture::pipeline::process_capture` runs all of them for one dump.
//! Every stage takes the screen size and classifier config as arguments,
//! so captures with different devices can be processed concurrently.

pub mod capture;
pub mod cli;
pub mod element;
pub mod error;
pub mod locator;
pub mod trace;
pub mod tree;

pub use capture::capture_model::{Capture, CaptureOptions, ScreenSource};
pub use capture::pipeline::{process_capture, process_tree};
pub use element::element_model::UIElement;
pub use error::HierarchyError;
pub use tree::tree_model::{Bounds, RawNode, ScreenRect};
