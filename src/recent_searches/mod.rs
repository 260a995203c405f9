//! Recent searches plugin for the search autocomplete
//!
//! [`RecentSearchesPlugin`] keeps the last queries in a key-value storage
//! and serves them back as suggestions. [`recent_searches_plugin`] builds the
//! configuration used on search pages: exact matches of the typed query are
//! hidden, only two suggestions are shown while typing, and picking one keeps
//! the panel open so the new query's results show up right away.

mod search;
mod storage;
mod store;

pub use search::{default_search, highlight, SearchParams, HIGHLIGHT_POST_TAG, HIGHLIGHT_PRE_TAG};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{RecentSearchItem, RecentSearchesStore, STORAGE_KEY_PREFIX};

use crate::utils::StorageError;

/// Storage namespace of the search page plugin
pub const RECENT_SEARCHES_KEY: &str = "algolia-recent-searches";
/// Number of recent searches kept and shown on an empty query
pub const RECENT_SEARCHES_LIMIT: usize = 5;
/// Number of recent searches shown while the user is typing
pub const TYPING_SUGGESTIONS_LIMIT: usize = 2;

/// Controls of the autocomplete instance the plugin is attached to
#[cfg_attr(test, mockall::automock)]
pub trait AutocompleteHost {
    /// Replace the input's query
    fn set_query(&mut self, query: &str);
    /// Open or close the suggestion panel
    fn set_is_open(&mut self, is_open: bool);
    /// Run the sources again for the current query
    fn refresh(&mut self);
}

/// Lookup strategy over the stored items
pub type SearchFn = Box<dyn Fn(&SearchParams<'_>) -> Vec<RecentSearchItem>>;
/// Reaction to a recent search being picked
pub type OnSelectFn = Box<dyn Fn(&mut dyn AutocompleteHost, &RecentSearchItem)>;

/// Options of a [`RecentSearchesPlugin`]
pub struct PluginOptions {
    /// Storage namespace, prefixed with [`STORAGE_KEY_PREFIX`]
    pub key: String,
    /// Maximum number of stored items
    pub limit: usize,
    pub search: SearchFn,
    /// Overrides the default behavior of closing the panel on select
    pub on_select: Option<OnSelectFn>,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            key: RECENT_SEARCHES_KEY.to_string(),
            limit: RECENT_SEARCHES_LIMIT,
            search: Box::new(default_search),
            on_select: None,
        }
    }
}

/// A recent search ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub item: RecentSearchItem,
    /// Label with the matched part wrapped in highlight tags
    pub highlighted_label: String,
}

/// Recent searches source for an autocomplete instance
pub struct RecentSearchesPlugin<S> {
    store: RecentSearchesStore<S>,
    search: SearchFn,
    on_select: Option<OnSelectFn>,
}

impl<S: KeyValueStorage> RecentSearchesPlugin<S> {
    pub fn new(storage: S, options: PluginOptions) -> Self {
        Self {
            store: RecentSearchesStore::new(storage, &options.key, options.limit),
            search: options.search,
            on_select: options.on_select,
        }
    }

    pub fn store(&self) -> &RecentSearchesStore<S> {
        &self.store
    }

    /// Recent searches to show for `query`
    pub fn get_items(&self, query: &str) -> Vec<RecentSearchItem> {
        let items = self.store.get_all();
        (self.search)(&SearchParams {
            query,
            items: &items,
            limit: self.store.limit(),
        })
    }

    /// Like [`get_items`](Self::get_items), with highlighted labels
    pub fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        self.get_items(query)
            .into_iter()
            .map(|item| Suggestion {
                highlighted_label: highlight(&item.label, query),
                item,
            })
            .collect()
    }

    /// Remember a submitted query. Empty queries are not stored.
    pub fn on_submit(&mut self, query: &str) -> Result<(), StorageError> {
        if query.is_empty() {
            return Ok(());
        }
        log::debug!("Storing recent search '{}'", query);
        self.store.add_item(RecentSearchItem::from_query(query))
    }

    /// Handle a recent search being picked from the panel.
    ///
    /// The item becomes the query and the most recent entry, then the host
    /// is refreshed so the query runs.
    pub fn on_select(
        &mut self,
        item: &RecentSearchItem,
        host: &mut dyn AutocompleteHost,
    ) -> Result<(), StorageError> {
        self.store.add_item(item.clone())?;
        host.set_query(&item.label);
        match &self.on_select {
            Some(on_select) => on_select(&mut *host, item),
            None => host.set_is_open(false),
        }
        host.refresh();
        Ok(())
    }

    /// Forget one recent search
    pub fn remove(&mut self, id: &str) -> Result<(), StorageError> {
        self.store.remove_item(id)
    }
}

/// Filtering used on search pages.
///
/// Hides a lone suggestion identical to the typed query and shows at most
/// [`TYPING_SUGGESTIONS_LIMIT`] entries while the query is non-empty.
pub fn filter_recent_searches(params: &SearchParams<'_>) -> Vec<RecentSearchItem> {
    let mut results = default_search(params);
    if let [only] = results.as_slice() {
        if only.label == params.query {
            return Vec::new();
        }
    }
    if !params.query.is_empty() {
        results.truncate(TYPING_SUGGESTIONS_LIMIT);
    }
    results
}

/// Keep the panel open after a pick so the picked query's results show
pub fn keep_panel_open(host: &mut dyn AutocompleteHost, _item: &RecentSearchItem) {
    host.set_is_open(true);
}

/// Plugin as configured on search pages, with the given namespace and cap
pub fn recent_searches_plugin_with<S: KeyValueStorage>(
    storage: S,
    key: &str,
    limit: usize,
) -> RecentSearchesPlugin<S> {
    RecentSearchesPlugin::new(
        storage,
        PluginOptions {
            key: key.to_string(),
            limit,
            search: Box::new(filter_recent_searches),
            on_select: Some(Box::new(keep_panel_open)),
        },
    )
}

/// Plugin as configured on search pages
pub fn recent_searches_plugin<S: KeyValueStorage>(storage: S) -> RecentSearchesPlugin<S> {
    recent_searches_plugin_with(storage, RECENT_SEARCHES_KEY, RECENT_SEARCHES_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    fn items(labels: &[&str]) -> Vec<RecentSearchItem> {
        labels.iter().map(|l| RecentSearchItem::from_query(l)).collect()
    }

    fn labels(items: &[RecentSearchItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_exact_single_match_is_hidden() {
        let stored = items(&["abc", "xyz"]);
        let params = SearchParams { query: "abc", items: &stored, limit: 5 };
        assert!(filter_recent_searches(&params).is_empty());
    }

    #[test]
    fn test_exact_match_kept_among_others() {
        let stored = items(&["abc", "abcdef"]);
        let params = SearchParams { query: "abc", items: &stored, limit: 5 };
        assert_eq!(labels(&filter_recent_searches(&params)), vec!["abc", "abcdef"]);
    }

    #[test]
    fn test_single_match_with_different_case_is_kept() {
        let stored = items(&["ABC"]);
        let params = SearchParams { query: "abc", items: &stored, limit: 5 };
        assert_eq!(labels(&filter_recent_searches(&params)), vec!["ABC"]);
    }

    #[test]
    fn test_typing_truncates_to_two() {
        let stored = items(&["a1", "a2", "a3", "a4", "a5"]);
        let params = SearchParams { query: "a", items: &stored, limit: 5 };
        assert_eq!(labels(&filter_recent_searches(&params)), vec!["a1", "a2"]);
    }

    #[test]
    fn test_empty_query_returns_limit() {
        let stored = items(&["a", "b", "c", "d", "e", "f"]);
        let params = SearchParams { query: "", items: &stored, limit: 5 };
        assert_eq!(filter_recent_searches(&params).len(), 5);
    }

    #[test]
    fn test_plugin_suggestions() {
        let mut plugin = recent_searches_plugin(MemoryStorage::new());
        for q in ["install", "invoice", "inbox", "", "billing"] {
            plugin.on_submit(q).unwrap();
        }

        assert_eq!(
            labels(&plugin.get_items("")),
            vec!["billing", "inbox", "invoice", "install"]
        );
        // "billing" contains "in" too
        assert_eq!(labels(&plugin.get_items("in")), vec!["billing", "inbox"]);
        assert!(plugin.get_items("billing").is_empty());

        let suggestions = plugin.suggestions("voi");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(
            suggestions[0].highlighted_label,
            "in__aa-highlight__voi__/aa-highlight__ce"
        );
    }

    #[test]
    fn test_plugin_caps_stored_items() {
        let mut plugin = recent_searches_plugin(MemoryStorage::new());
        for q in ["1", "2", "3", "4", "5", "6", "7"] {
            plugin.on_submit(q).unwrap();
        }
        assert_eq!(plugin.store().get_all().len(), RECENT_SEARCHES_LIMIT);
    }

    #[test]
    fn test_select_keeps_panel_open() {
        let mut plugin = recent_searches_plugin(MemoryStorage::new());
        plugin.on_submit("refund").unwrap();
        plugin.on_submit("shipping").unwrap();

        let mut host = MockAutocompleteHost::new();
        let mut seq = Sequence::new();
        host.expect_set_query()
            .withf(|query| query == "refund")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_set_is_open()
            .withf(|is_open| *is_open)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_refresh()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let item = RecentSearchItem::from_query("refund");
        plugin.on_select(&item, &mut host).unwrap();

        assert_eq!(labels(&plugin.store().get_all()), vec!["refund", "shipping"]);
    }

    #[test]
    fn test_default_select_closes_panel() {
        let mut plugin = RecentSearchesPlugin::new(MemoryStorage::new(), PluginOptions::default());

        let mut host = MockAutocompleteHost::new();
        host.expect_set_query().return_const(());
        host.expect_set_is_open()
            .withf(|is_open| !*is_open)
            .times(1)
            .return_const(());
        host.expect_refresh().times(1).return_const(());

        plugin
            .on_select(&RecentSearchItem::from_query("x"), &mut host)
            .unwrap();
    }

    #[test]
    fn test_default_options_do_not_filter() {
        let mut plugin = RecentSearchesPlugin::new(MemoryStorage::new(), PluginOptions::default());
        plugin.on_submit("abc").unwrap();
        assert_eq!(labels(&plugin.get_items("abc")), vec!["abc"]);
    }
}
