use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Rating, SanitizedText, TypeConstraintError};

/// A visitor comment with a star rating, attached to a listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub rating: i32,
    pub submit_date: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewComment {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub rating: i32,
    pub submit_date: NaiveDateTime,
}

impl NewComment {
    /// Sanitizes the body and validates the rating range.
    pub fn new(
        post_id: i32,
        user_id: i32,
        content: &str,
        rating: i32,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            post_id,
            user_id,
            content: SanitizedText::new(content)?.into_inner(),
            rating: Rating::new(rating)?.get(),
            submit_date: chrono::Utc::now().naive_utc(),
        })
    }
}
