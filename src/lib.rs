//! # Binix Search - autocomplete integration for help center search forms
//!
//! Utilities that prepare an existing search form for an autocomplete
//! widget, remember recent searches, and build article links from search
//! results.
//!
//! ## Architecture
//!
//! - **dom**: document capability and search form extraction
//! - **color**: CSS color to RGB resolution for theming
//! - **recent_searches**: recent searches plugin and its key-value storage
//! - **search**: search hit records and article URLs
//! - **config**: integration settings
//! - **engine**: one-shot page setup tying the above together
//! - **utils**: shared utilities and error types

pub mod color;
pub mod config;
pub mod dom;
pub mod engine;
pub mod recent_searches;
pub mod search;
pub mod utils;

// Re-export main types for convenience
pub use color::get_rgb;
pub use config::SearchConfig;
pub use dom::{get_container_and_button, DomTree, FormContainerPair, HtmlDocument};
pub use engine::{MountedSearch, SearchEngine};
pub use recent_searches::{recent_searches_plugin, RecentSearchesPlugin};
pub use search::{build_url, BuildUrlParams, SearchHit};
pub use utils::error::{Result, SearchError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Binix Search";
