//! Article URL building

use super::hit::ArticleRef;

/// Inputs of [`build_url`]
#[derive(Debug)]
pub struct BuildUrlParams<'a, H: ?Sized> {
    /// Help center root, expected to end with `/`
    pub base_url: &'a str,
    pub locale: &'a str,
    pub hit: &'a H,
}

/// `{base_url}{locale}/articles/{id}`.
///
/// Inputs are not validated; a malformed base URL or locale ends up in the
/// result as is.
pub fn build_url<H: ArticleRef + ?Sized>(params: BuildUrlParams<'_, H>) -> String {
    format!(
        "{}{}/articles/{}",
        params.base_url,
        params.locale,
        params.hit.article_id()
    )
}
