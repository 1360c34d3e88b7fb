//! Query parameters accepted by the JSON API.

use serde::Deserialize;

use crate::domain::search::SearchFilters;

/// Parameters of `GET /api/v1/posts`: the four filter dimensions plus an
/// optional owner filter. All optional, all strings; malformed values act as
/// no constraint.
#[derive(Debug, Default, Deserialize)]
pub struct ApiPostsQuery {
    #[serde(default, rename = "categoryId")]
    pub category_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "priceRange")]
    pub price_range: String,
    #[serde(default)]
    pub bedroom: String,
    #[serde(default, rename = "userId")]
    pub user_id: String,
}

impl ApiPostsQuery {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            category_id: self.category_id.clone(),
            location: self.location.clone(),
            price_range: self.price_range.clone(),
            bedroom: self.bedroom.clone(),
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user_id.trim().parse().ok()
    }
}
