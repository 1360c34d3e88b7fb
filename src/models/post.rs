use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{
    NewPost as DomainNewPost, Post as DomainPost, PostImage as DomainPostImage,
    UpdatePost as DomainUpdatePost,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::posts)]
/// Diesel model for [`crate::domain::post::Post`]. Images live in their own
/// table and are attached when converting into the domain type.
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub price: i64,
    pub address: String,
    pub location: String,
    pub bedroom: i32,
    pub area: i32,
    pub content: String,
    pub is_rented: bool,
    pub upload_date: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Post, foreign_key = post_id))]
#[diesel(table_name = crate::schema::post_images)]
pub struct PostImage {
    pub id: i32,
    pub post_id: i32,
    pub base_url: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::posts)]
/// Insertable form of [`Post`].
pub struct NewPost<'a> {
    pub user_id: i32,
    pub category_id: i32,
    pub price: i64,
    pub address: &'a str,
    pub location: &'a str,
    pub bedroom: i32,
    pub area: i32,
    pub content: &'a str,
    pub is_rented: bool,
    pub upload_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::post_images)]
pub struct NewPostImage<'a> {
    pub post_id: i32,
    pub base_url: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::posts)]
/// Data used when updating a [`Post`] record.
pub struct UpdatePost<'a> {
    pub category_id: i32,
    pub price: i64,
    pub address: &'a str,
    pub location: &'a str,
    pub bedroom: i32,
    pub area: i32,
    pub content: &'a str,
}

impl Post {
    /// Combines the row with its image rows into the domain entity.
    pub fn into_domain(self, images: Vec<PostImage>) -> DomainPost {
        DomainPost {
            id: self.id,
            user_id: self.user_id,
            category_id: self.category_id,
            price: self.price,
            address: self.address,
            location: self.location,
            bedroom: self.bedroom,
            area: self.area,
            content: self.content,
            is_rented: self.is_rented,
            upload_date: self.upload_date,
            images: images.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PostImage> for DomainPostImage {
    fn from(image: PostImage) -> Self {
        Self {
            id: image.id,
            base_url: image.base_url,
        }
    }
}

impl<'a> From<&'a DomainNewPost> for NewPost<'a> {
    fn from(post: &'a DomainNewPost) -> Self {
        Self {
            user_id: post.user_id,
            category_id: post.category_id,
            price: post.price,
            address: post.address.as_str(),
            location: post.location.as_str(),
            bedroom: post.bedroom,
            area: post.area,
            content: post.content.as_str(),
            is_rented: false,
            upload_date: post.upload_date,
        }
    }
}

impl<'a> From<&'a DomainUpdatePost> for UpdatePost<'a> {
    fn from(post: &'a DomainUpdatePost) -> Self {
        Self {
            category_id: post.category_id,
            price: post.price,
            address: post.address.as_str(),
            location: post.location.as_str(),
            bedroom: post.bedroom,
            area: post.area,
            content: post.content.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewPost::new(1, 2, 1500, " 12 Main St ", "57.7,11.9", 3, 80, " Cozy ");
        let new: NewPost = (&domain).into();
        assert_eq!(new.user_id, 1);
        assert_eq!(new.category_id, 2);
        assert_eq!(new.address, "12 Main St");
        assert_eq!(new.content, "Cozy");
        assert!(!new.is_rented);
    }

    #[test]
    fn into_domain_attaches_images() {
        let now = chrono::Utc::now().naive_utc();
        let row = Post {
            id: 4,
            user_id: 1,
            category_id: 2,
            price: 900,
            address: "addr".into(),
            location: "0,0".into(),
            bedroom: 1,
            area: 40,
            content: "desc".into(),
            is_rented: false,
            upload_date: now,
        };
        let domain = row.into_domain(vec![PostImage {
            id: 9,
            post_id: 4,
            base_url: "a.jpg".into(),
        }]);
        assert_eq!(domain.id, 4);
        assert_eq!(domain.images.len(), 1);
        assert_eq!(domain.images[0].base_url, "a.jpg");
    }
}
