//! Search UI mounted on a page

use crate::recent_searches::RecentSearchesPlugin;

/// Everything the autocomplete widget needs once the page is prepared
pub struct MountedSearch<N, S> {
    /// Container that replaced the search form
    container: N,
    /// Submit button of the original form
    submit_button: Option<N>,
    /// Theme color as `"r, g, b"`
    primary_rgb: String,
    recent_searches: RecentSearchesPlugin<S>,
}

impl<N: Copy, S> MountedSearch<N, S> {
    /// Create a new mounted search
    pub fn new(
        container: N,
        submit_button: Option<N>,
        primary_rgb: String,
        recent_searches: RecentSearchesPlugin<S>,
    ) -> Self {
        Self {
            container,
            submit_button,
            primary_rgb,
            recent_searches,
        }
    }

    pub fn container(&self) -> N {
        self.container
    }

    pub fn submit_button(&self) -> Option<N> {
        self.submit_button
    }

    pub fn primary_rgb(&self) -> &str {
        &self.primary_rgb
    }

    pub fn recent_searches(&self) -> &RecentSearchesPlugin<S> {
        &self.recent_searches
    }

    pub fn recent_searches_mut(&mut self) -> &mut RecentSearchesPlugin<S> {
        &mut self.recent_searches
    }

    /// CSS rule text for the panel highlight, using the resolved theme color
    pub fn highlight_style(&self, alpha: f32) -> String {
        format!("rgba({}, {})", self.primary_rgb, alpha)
    }
}
