use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::comment::{Comment as DomainComment, NewComment as DomainNewComment};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::comments)]
/// Diesel model for [`crate::domain::comment::Comment`].
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub rating: i32,
    pub submit_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment<'a> {
    pub post_id: i32,
    pub user_id: i32,
    pub content: &'a str,
    pub rating: i32,
    pub submit_date: NaiveDateTime,
}

impl From<Comment> for DomainComment {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content,
            rating: comment.rating,
            submit_date: comment.submit_date,
        }
    }
}

impl<'a> From<&'a DomainNewComment> for NewComment<'a> {
    fn from(comment: &'a DomainNewComment) -> Self {
        Self {
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content.as_str(),
            rating: comment.rating,
            submit_date: comment.submit_date,
        }
    }
}
