//! Data for the landing page.

use serde::Serialize;

use crate::dto::post::PostCard;

#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Most recent available listings, served from the shared feed snapshot.
    pub featured: Vec<PostCard>,
    pub total_views: i64,
}
