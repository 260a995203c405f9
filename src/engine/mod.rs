//! Search integration setup
//!
//! The SearchEngine prepares a page for the autocomplete widget:
//! 1. Swap the search form for an empty container
//! 2. Resolve the theme color, falling back when it can't be used
//! 3. Configure the recent searches plugin on the given storage
//!
//! DOM lookups fail hard since they mean the page is misconfigured. A bad
//! color only costs the theme.

mod mounted;

pub use mounted::MountedSearch;

use crate::color::resolve_color_or;
use crate::config::SearchConfig;
use crate::dom::{get_container_and_button, DomTree};
use crate::recent_searches::{recent_searches_plugin_with, KeyValueStorage};
use crate::search::{build_url, hydrate_hits, ArticleRef, BuildUrlParams, SearchHit, SearchResponse};
use crate::utils::Result;

/// Coordinates the search integration for one page
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Prepare `dom` for the widget. Can only succeed once per page.
    pub fn mount<D, S>(&self, dom: &mut D, storage: S) -> Result<MountedSearch<D::Node, S>>
    where
        D: DomTree + ?Sized,
        S: KeyValueStorage,
    {
        let pair = get_container_and_button(dom, &self.config.input_selector)?;
        let primary_rgb = resolve_color_or(&self.config.primary_color, &self.config.fallback_color)?;
        let recent_searches = recent_searches_plugin_with(
            storage,
            &self.config.recent_searches.key,
            self.config.recent_searches.limit,
        );

        log::info!(
            "Search mounted on '{}' (theme {})",
            self.config.input_selector,
            primary_rgb
        );
        Ok(MountedSearch::new(
            pair.container,
            pair.submit_button,
            primary_rgb,
            recent_searches,
        ))
    }

    /// Article URL of `hit` for the configured help center and locale
    pub fn article_url<H: ArticleRef + ?Sized>(&self, hit: &H) -> String {
        build_url(BuildUrlParams {
            base_url: &self.config.base_url,
            locale: &self.config.locale,
            hit,
        })
    }

    /// Prepare provider hits for display
    pub fn hydrate(&self, response: &mut SearchResponse<SearchHit>) {
        hydrate_hits(response, &self.config.base_url, &self.config.locale);
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;
    use crate::recent_searches::MemoryStorage;
    use crate::utils::{DomError, SearchError};

    const PAGE: &str = r#"<html><body><form><input id="query"><input type="submit"></form></body></html>"#;

    #[test]
    fn test_mount() {
        let engine = SearchEngine::default();
        let mut doc = HtmlDocument::parse(PAGE);
        let mut mounted = engine.mount(&mut doc, MemoryStorage::new()).unwrap();

        assert!(mounted.submit_button().is_some());
        assert!(doc.is_attached(mounted.container()));
        assert_eq!(mounted.primary_rgb(), "60, 79, 224");
        assert_eq!(mounted.highlight_style(0.1), "rgba(60, 79, 224, 0.1)");

        mounted.recent_searches_mut().on_submit("hello").unwrap();
        assert_eq!(mounted.recent_searches().get_items("").len(), 1);
    }

    #[test]
    fn test_mount_falls_back_on_translucent_color() {
        let config = SearchConfig {
            primary_color: "rgba(0, 0, 0, 0.5)".to_string(),
            fallback_color: "white".to_string(),
            ..SearchConfig::default()
        };
        let engine = SearchEngine::new(config);
        let mut doc = HtmlDocument::parse(PAGE);
        let mounted = engine.mount(&mut doc, MemoryStorage::new()).unwrap();
        assert_eq!(mounted.primary_rgb(), "255, 255, 255");
    }

    #[test]
    fn test_mount_twice_fails() {
        let engine = SearchEngine::default();
        let mut doc = HtmlDocument::parse(PAGE);
        engine.mount(&mut doc, MemoryStorage::new()).unwrap();
        let err = engine.mount(&mut doc, MemoryStorage::new()).err().unwrap();
        assert!(matches!(err, SearchError::Dom(DomError::SelectorNotFound(_))));
    }

    #[test]
    fn test_article_url() {
        let engine = SearchEngine::default();
        assert_eq!(engine.article_url("42"), "/hc/en-us/articles/42");
    }
}
