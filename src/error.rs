use std::fmt;

#[derive(Debug)]
pub enum HierarchyError {
    /// The dump is not well-formed XML
    Xml { position: u64, message: String },

    /// Nothing left after stripping control characters and whitespace
    EmptyDocument,

    /// Unclosed elements, stray end tags or more than one root element
    UnbalancedDocument(String),

    /// Tree nesting exceeded the configured ceiling
    DepthExceeded { limit: usize },

    /// JSON (de)serialization failed
    Json { context: String, source: serde_json::Error },

    /// Reading or writing a file failed
    Io { path: String, source: std::io::Error },

    /// A locator with this name already exists in the store
    DuplicateLocator(String),

    /// No element with this index in the capture
    ElementNotFound(usize),

    /// Screen size argument is not of the form WIDTHxHEIGHT
    InvalidScreenSize(String),
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HierarchyError::Xml { position, message } => {
                write!(f, "XML parse error at byte {}: {}", position, message)
            }
            HierarchyError::EmptyDocument => write!(f, "Hierarchy dump is empty"),
            HierarchyError::UnbalancedDocument(msg) => {
                write!(f, "Malformed hierarchy: {}", msg)
            }
            HierarchyError::DepthExceeded { limit } => {
                write!(f, "Hierarchy nesting exceeds depth limit of {}", limit)
            }
            HierarchyError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            HierarchyError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            HierarchyError::DuplicateLocator(name) => {
                write!(f, "Locator '{}' already exists", name)
            }
            HierarchyError::ElementNotFound(index) => {
                write!(f, "No element with index {} in this capture", index)
            }
            HierarchyError::InvalidScreenSize(raw) => {
                write!(f, "Invalid screen size '{}', expected WIDTHxHEIGHT", raw)
            }
        }
    }
}

impl std::error::Error for HierarchyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HierarchyError::Json { source, .. } => Some(source),
            HierarchyError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
