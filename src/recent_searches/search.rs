//! Default lookup over stored recent searches

use super::store::RecentSearchItem;

/// Marks the start of a highlighted match
pub const HIGHLIGHT_PRE_TAG: &str = "__aa-highlight__";
/// Marks the end of a highlighted match
pub const HIGHLIGHT_POST_TAG: &str = "__/aa-highlight__";

/// Arguments of a recent-searches lookup
#[derive(Debug, Clone, Copy)]
pub struct SearchParams<'a> {
    pub query: &'a str,
    pub items: &'a [RecentSearchItem],
    pub limit: usize,
}

/// Items whose label contains the query (case-insensitive), at most `limit`.
/// An empty query matches everything.
pub fn default_search(params: &SearchParams<'_>) -> Vec<RecentSearchItem> {
    if params.query.is_empty() {
        return params.items.iter().take(params.limit).cloned().collect();
    }
    let query = params.query.to_lowercase();
    params
        .items
        .iter()
        .filter(|item| item.label.to_lowercase().contains(&query))
        .take(params.limit)
        .cloned()
        .collect()
}

/// Wrap the first case-insensitive occurrence of `query` in highlight tags.
/// Case folding matches [`default_search`].
pub fn highlight(label: &str, query: &str) -> String {
    if query.is_empty() {
        return label.to_string();
    }
    match find_folded(label, &query.to_lowercase()) {
        Some((start, end)) => format!(
            "{}{}{}{}{}",
            &label[..start],
            HIGHLIGHT_PRE_TAG,
            &label[start..end],
            HIGHLIGHT_POST_TAG,
            &label[end..]
        ),
        None => label.to_string(),
    }
}

/// Byte range in `label` whose lowercase form equals `folded_query`
fn find_folded(label: &str, folded_query: &str) -> Option<(usize, usize)> {
    for (start, _) in label.char_indices() {
        let mut folded = String::new();
        for (offset, ch) in label[start..].char_indices() {
            folded.extend(ch.to_lowercase());
            if !folded_query.starts_with(folded.as_str()) {
                break;
            }
            if folded.len() == folded_query.len() {
                return Some((start, start + offset + ch.len_utf8()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(labels: &[&str]) -> Vec<RecentSearchItem> {
        labels.iter().map(|l| RecentSearchItem::from_query(l)).collect()
    }

    #[test]
    fn test_empty_query_takes_first_items() {
        let items = items(&["a", "b", "c"]);
        let params = SearchParams { query: "", items: &items, limit: 2 };
        let results = default_search(&params);
        assert_eq!(results, items[..2].to_vec());
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let items = items(&["Rust book", "trust", "go", "RUSTC"]);
        let params = SearchParams { query: "rust", items: &items, limit: 5 };
        let labels: Vec<_> = default_search(&params).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Rust book", "trust", "RUSTC"]);
    }

    #[test]
    fn test_highlight() {
        assert_eq!(
            highlight("Trust me", "rust"),
            "T__aa-highlight__rust__/aa-highlight__ me"
        );
        assert_eq!(highlight("abc", ""), "abc");
        assert_eq!(highlight("abc", "xyz"), "abc");
        assert_eq!(highlight("héllo", "llo"), "hé__aa-highlight__llo__/aa-highlight__");
    }

    #[test]
    fn test_highlight_folds_like_search() {
        let items = items(&["ÉCOLE du Nord"]);
        let params = SearchParams { query: "école", items: &items, limit: 5 };
        assert_eq!(default_search(&params).len(), 1);
        assert_eq!(
            highlight("ÉCOLE du Nord", "école"),
            "__aa-highlight__ÉCOLE__/aa-highlight__ du Nord"
        );
        assert_eq!(highlight("Straße", "SSE"), "Straße");
        assert_eq!(
            highlight("Ärger", "ÄR"),
            "__aa-highlight__Är__/aa-highlight__ger"
        );
    }
}
