//! Search provider records and the links built from them

mod hit;
mod links;

pub use hit::{ArticleRef, HitCategory, HitLocale, HitSection, SearchHit};
pub use links::{build_url, BuildUrlParams};

use serde::{Deserialize, Serialize};

/// Response of the search provider for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<T> {
    pub hits: Vec<T>,
    #[serde(default)]
    pub nb_hits: Option<u64>,
    #[serde(default)]
    pub query: String,
    #[serde(rename = "queryID", default)]
    pub query_id: Option<String>,
}

/// Fill in each hit's zero-based position, the response's query id and the
/// article URL for `locale`.
pub fn hydrate_hits(response: &mut SearchResponse<SearchHit>, base_url: &str, locale: &str) {
    for (position, hit) in response.hits.iter_mut().enumerate() {
        hit.result_position = Some(position);
        hit.query_id = response.query_id.clone();
        hit.url = build_url(BuildUrlParams {
            base_url,
            locale,
            hit: &*hit,
        });
    }
    log::debug!(
        "Hydrated {} hits for query '{}'",
        response.hits.len(),
        response.query
    );
}
