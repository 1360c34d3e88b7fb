//! DTOs shaped for listing templates.

use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::post::Post;
use crate::dto::comment::CommentView;

/// A summary card for the search results grid and listing tables.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostCard {
    pub id: i32,
    pub price: i64,
    pub address: String,
    pub bedroom: i32,
    pub area: i32,
    pub category: String,
    pub cover_image: Option<String>,
    pub is_rented: bool,
}

impl PostCard {
    pub fn new(post: &Post, categories: &[Category]) -> Self {
        Self {
            id: post.id,
            price: post.price,
            address: post.address.clone(),
            bedroom: post.bedroom,
            area: post.area,
            category: categories
                .iter()
                .find(|category| category.id == post.category_id)
                .map(|category| category.name.clone())
                .unwrap_or_default(),
            cover_image: post.images.first().map(|image| image.base_url.clone()),
            is_rented: post.is_rented,
        }
    }
}

/// Aggregated data required to render the listing detail page.
#[derive(Debug, Serialize)]
pub struct PostPageData {
    pub post: Post,
    pub category: Option<String>,
    pub owner_name: String,
    pub owner_phone: String,
    pub uploaded: String,
    pub comments: Vec<CommentView>,
}

/// Data for the create/edit listing form pages.
#[derive(Debug, Serialize)]
pub struct ComposePageData {
    pub categories: Vec<Category>,
    /// Present when editing an existing listing.
    pub post: Option<Post>,
}

/// Data for the owner's "my listings" table.
#[derive(Debug, Serialize)]
pub struct MyListingsPageData {
    pub listings: Vec<PostCard>,
}
