//! Repository traits and query builders over the marketplace database.
//!
//! Services are generic over these traits; `DieselRepository` is the
//! production implementation and tests substitute mocks.

use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::feedback::{Feedback, NewFeedback};
use crate::domain::post::{NewPost, Post, UpdatePost};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod comment;
pub mod errors;
pub mod feedback;
pub mod post;
pub mod user;
pub mod views;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Listing query built from the search filter state: a field left `None`
/// applies no constraint, mirroring the filter panel's empty selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListQuery {
    pub category_id: Option<i32>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub location: Option<String>,
    pub min_bedroom: Option<i32>,
    pub user_id: Option<i32>,
    /// Rented listings are hidden from search but shown to their owner.
    pub include_rented: bool,
}

impl PostListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn price_between(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn location(mut self, term: impl Into<String>) -> Self {
        self.location = Some(term.into());
        self
    }

    pub fn bedrooms(mut self, min: i32) -> Self {
        self.min_bedroom = Some(min);
        self
    }

    pub fn owner(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn include_rented(mut self) -> Self {
        self.include_rented = true;
        self
    }
}

pub trait PostReader {
    fn get_post_by_id(&self, post_id: i32) -> RepositoryResult<Option<Post>>;
    /// Returns matching listings, newest first, with images attached.
    fn list_posts(&self, query: PostListQuery) -> RepositoryResult<Vec<Post>>;
}

pub trait PostWriter {
    fn create_post(&self, new_post: &NewPost, images: &[String]) -> RepositoryResult<Post>;
    fn update_post(&self, post_id: i32, updates: &UpdatePost) -> RepositoryResult<Post>;
    fn set_post_rented(&self, post_id: i32, rented: bool) -> RepositoryResult<Post>;
    fn delete_post(&self, post_id: i32) -> RepositoryResult<()>;
}

pub trait CategoryReader {
    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
}

pub trait CommentReader {
    /// Comments on one listing with their authors, newest first.
    fn list_post_comments(&self, post_id: i32) -> RepositoryResult<Vec<(Comment, User)>>;
    /// Every comment with author and listing, newest first. Listing images
    /// are not loaded here.
    fn list_all_comments(&self) -> RepositoryResult<Vec<(Comment, User, Post)>>;
}

pub trait CommentWriter {
    fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment>;
    fn delete_comment(&self, comment_id: i32) -> RepositoryResult<()>;
}

pub trait FeedbackReader {
    fn list_feedbacks(&self) -> RepositoryResult<Vec<Feedback>>;
}

pub trait FeedbackWriter {
    fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
}

pub trait UserReader {
    fn get_user_by_id(&self, user_id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

pub trait SiteViewsReader {
    fn total_views(&self) -> RepositoryResult<i64>;
}

pub trait SiteViewsWriter {
    /// Increments the site-wide page view counter, returning the new total.
    fn record_view(&self) -> RepositoryResult<i64>;
}
