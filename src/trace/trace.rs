use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    capture::capture_model::{Capture, ScreenSource},
    element::extractor::Strategy,
};

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub command: String,

    pub fingerprint: String,
    pub screen: [i32; 2],
    pub screen_source: ScreenSource,
    pub strategy: Strategy,

    pub raw_nodes: usize,
    pub optimized_nodes: usize,
    pub elements: usize,

    pub warning: Option<String>,
    pub selected: Option<String>,
}

impl TraceEvent {
    pub fn for_capture(command: &str, capture: &Capture) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            command: command.to_string(),
            fingerprint: capture.fingerprint.clone(),
            screen: [capture.screen.width, capture.screen.height],
            screen_source: capture.screen_source,
            strategy: capture.strategy,
            raw_nodes: capture.raw_node_count,
            optimized_nodes: capture.optimized_node_count(),
            elements: capture.elements.len(),
            warning: capture.warning.clone(),
            selected: None,
        }
    }

    /// Record the element a command acted on (search hit, saved locator).
    pub fn with_selected(mut self, selected: impl ToString) -> Self {
        self.selected = Some(selected.to_string());
        self
    }
}
