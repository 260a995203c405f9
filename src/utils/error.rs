//! Error types for Binix Search

use thiserror::Error;

/// Main error type for Binix Search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Document lookup/mutation errors
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
    /// Color resolution errors
    #[error("Color error: {0}")]
    Color(#[from] ColorError),
    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Errors raised while locating the search form.
///
/// All of these mean the host page is misconfigured and setup should stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No element matches the input selector
    #[error("Couldn't find any input matching inputSelector '{0}'.")]
    SelectorNotFound(String),
    /// More than one element matches the input selector
    #[error("Too many inputs ({count}) matching inputSelector '{selector}'.")]
    SelectorAmbiguous { selector: String, count: usize },
    /// The matched input has no form ancestor
    #[error("Couldn't find the form container of inputSelector '{0}'")]
    FormNotFound(String),
    /// The selector is not valid CSS
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
    /// A node handle does not refer to a node of the tree
    #[error("Unknown node handle {0}")]
    UnknownNode(String),
    /// The node has no parent to be replaced in
    #[error("Node {0} is not attached to a parent")]
    Detached(String),
    /// An element could not be created with this tag name
    #[error("Invalid tag name '{0}'")]
    InvalidTagName(String),
}

/// Color resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The canonical serialization is not a 6-hex-digit color
    #[error("Couldn't resolve color '{input}' (canonical form '{canonical}')")]
    UnresolvedColor { input: String, canonical: String },
}

/// Key-value storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing file could not be read or written
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Stored data is not valid JSON
    #[error("storage data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("couldn't read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid JSON for the expected shape
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds an unusable value
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Convenience Result type for Binix Search operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_error_messages_name_selector() {
        let err = DomError::SelectorAmbiguous {
            selector: "input.q".to_string(),
            count: 3,
        };
        assert_eq!(err.to_string(), "Too many inputs (3) matching inputSelector 'input.q'.");

        let err = DomError::SelectorNotFound("#search".to_string());
        assert!(err.to_string().contains("'#search'"));
    }

    #[test]
    fn test_from_conversions() {
        let err: SearchError = DomError::FormNotFound("#q".to_string()).into();
        assert!(matches!(err, SearchError::Dom(DomError::FormNotFound(_))));

        let err: SearchError = ColorError::UnresolvedColor {
            input: "x".to_string(),
            canonical: "rgba(0, 0, 0, 0)".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Color error:"));
    }
}
