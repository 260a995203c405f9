//! Help center article hits as returned by the search provider

use serde::{Deserialize, Deserializer, Serialize};

/// Locale an article is written in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitLocale {
    pub locale: String,
    pub name: String,
    pub rtl: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitCategory {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitSection {
    pub id: String,
    pub title: String,
    pub full_path: String,
}

/// One article returned for a query.
///
/// `position`, `query_id` and `url` are filled in after retrieval, see
/// [`hydrate_hits`](super::hydrate_hits).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub locale: HitLocale,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub updated_at: i64,
    pub position: i64,
    pub title: String,
    pub body_safe: String,
    pub outdated: bool,
    pub promoted: bool,
    pub vote_sum: i64,
    pub comments_disabled: bool,
    pub category: HitCategory,
    pub section: HitSection,
    #[serde(default)]
    pub user_segment: Option<String>,
    #[serde(default)]
    pub label_names: serde_json::Value,
    pub created_at_iso: String,
    pub updated_at_iso: String,
    pub edited_at: i64,
    pub edited_at_iso: String,
    /// Zero-based rank in the result list
    #[serde(rename = "__position", default)]
    pub result_position: Option<usize>,
    #[serde(rename = "__queryID", default)]
    pub query_id: Option<String>,
    #[serde(default)]
    pub url: String,
}

/// Anything an article URL can be built for
pub trait ArticleRef {
    fn article_id(&self) -> &str;
}

impl ArticleRef for SearchHit {
    fn article_id(&self) -> &str {
        &self.id
    }
}

/// Bare article identifier
impl ArticleRef for str {
    fn article_id(&self) -> &str {
        self
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
