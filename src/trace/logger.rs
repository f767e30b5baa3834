use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    sync::Mutex,
};

use crate::error::HierarchyError;
use crate::trace::trace::TraceEvent;

/// JSONL sink for capture trace events. A sink that cannot be opened or
/// written leaves the CLI running without traces.
pub struct TraceLogger {
    path: String,
    sink: Option<Mutex<BufWriter<File>>>,
}

impl TraceLogger {
    /// Open `path` for appending; failures are logged and tracing is disabled.
    pub fn new(path: &str) -> Self {
        match Self::open(path) {
            Ok(logger) => logger,
            Err(e) => {
                log::warn!("tracing disabled: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn open(path: &str) -> Result<Self, HierarchyError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| HierarchyError::Io {
                path: path.to_string(),
                source,
            })?;

        Ok(Self {
            path: path.to_string(),
            sink: Some(Mutex::new(BufWriter::new(file))),
        })
    }

    pub fn disabled() -> Self {
        Self {
            path: String::new(),
            sink: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, event: &TraceEvent) {
        if let Err(e) = self.append(event) {
            log::warn!("dropped trace event for '{}': {}", event.command, e);
        }
    }

    fn append(&self, event: &TraceEvent) -> Result<(), HierarchyError> {
        let Some(sink) = &self.sink else {
            return Ok(());
        };

        let line = serde_json::to_string(event).map_err(|source| HierarchyError::Json {
            context: "trace event".into(),
            source,
        })?;

        // A poisoned lock still holds a usable writer
        let mut writer = sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .map_err(|source| HierarchyError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
