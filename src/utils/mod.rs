//! Shared utilities and error types

pub mod error;

pub use error::{ColorError, ConfigError, DomError, Result, SearchError, StorageError};
