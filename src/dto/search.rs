//! Data required to render the search page: the filter panel plus the result
//! grid.

use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::search::{PriceRange, SearchFilters};
use crate::dto::post::PostCard;

#[derive(Debug, Serialize)]
pub struct SearchPageData {
    /// The complete filter state echoed back into the panel controls.
    pub filters: SearchFilters,
    /// Canonical query string for the current state (empty fields omitted).
    pub query_string: String,
    /// Category options; empty when the reference fetch failed.
    pub categories: Vec<Category>,
    pub price_ranges: &'static [PriceRange],
    /// Parsed selections for the panel's `selected` markers.
    pub selected_category: Option<i32>,
    pub selected_bedroom: Option<i32>,
    pub listings: Vec<PostCard>,
    pub total: usize,
    /// True when the listing fetch failed and the grid shows a stale-or-empty
    /// set.
    pub fetch_failed: bool,
}
