use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A rental listing as shown to visitors.
///
/// Listings are owned by the persistence layer; the snapshot a page holds is
/// replaced wholesale on every fetch, never patched in place.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    /// Monthly price in whole dollars.
    pub price: i64,
    pub address: String,
    /// Pinned map location as a `lat,lon` string.
    pub location: String,
    pub bedroom: i32,
    /// Living area in square meters.
    pub area: i32,
    pub content: String,
    pub is_rented: bool,
    pub upload_date: NaiveDateTime,
    pub images: Vec<PostImage>,
}

/// A stored listing photo, addressed by its file name under the upload root.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostImage {
    pub id: i32,
    pub base_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPost {
    pub user_id: i32,
    pub category_id: i32,
    pub price: i64,
    pub address: String,
    pub location: String,
    pub bedroom: i32,
    pub area: i32,
    pub content: String,
    pub upload_date: NaiveDateTime,
}

impl NewPost {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: i32,
        category_id: i32,
        price: i64,
        address: impl Into<String>,
        location: impl Into<String>,
        bedroom: i32,
        area: i32,
        content: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            category_id,
            price,
            address: address.into().trim().to_string(),
            location: location.into().trim().to_string(),
            bedroom,
            area,
            content: content.into().trim().to_string(),
            upload_date: chrono::Utc::now().naive_utc(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePost {
    pub category_id: i32,
    pub price: i64,
    pub address: String,
    pub location: String,
    pub bedroom: i32,
    pub area: i32,
    pub content: String,
}

impl UpdatePost {
    #[must_use]
    pub fn new(
        category_id: i32,
        price: i64,
        address: impl Into<String>,
        location: impl Into<String>,
        bedroom: i32,
        area: i32,
        content: impl Into<String>,
    ) -> Self {
        Self {
            category_id,
            price,
            address: address.into().trim().to_string(),
            location: location.into().trim().to_string(),
            bedroom,
            area,
            content: content.into().trim().to_string(),
        }
    }
}
