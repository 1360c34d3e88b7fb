//! DTOs shaped for comment display and moderation templates.

use serde::Serialize;

use crate::domain::comment::Comment;
use crate::domain::user::User;

/// A comment as rendered on the listing detail page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentView {
    pub author: String,
    pub rating: i32,
    pub content: String,
    pub submitted: String,
}

impl CommentView {
    pub fn new(comment: &Comment, author: &User) -> Self {
        Self {
            author: author.full_name.clone(),
            rating: comment.rating,
            content: comment.content.clone(),
            submitted: comment.submit_date.format("%b %d, %Y").to_string(),
        }
    }
}

/// A row in the admin moderation table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentRow {
    pub id: i32,
    pub author: String,
    pub listing: String,
    pub rating: i32,
    pub content: String,
    pub submitted: String,
}
