use diesel::prelude::*;

use crate::domain::post::{NewPost, Post, UpdatePost};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PostListQuery, PostReader, PostWriter};

impl PostReader for DieselRepository {
    fn get_post_by_id(&self, post_id: i32) -> RepositoryResult<Option<Post>> {
        use crate::models::post::{Post as DbPost, PostImage as DbPostImage};
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let post = posts::table
            .find(post_id)
            .first::<DbPost>(&mut conn)
            .optional()?;

        match post {
            Some(post) => {
                let images = DbPostImage::belonging_to(&post).load::<DbPostImage>(&mut conn)?;
                Ok(Some(post.into_domain(images)))
            }
            None => Ok(None),
        }
    }

    fn list_posts(&self, query: PostListQuery) -> RepositoryResult<Vec<Post>> {
        use crate::models::post::{Post as DbPost, PostImage as DbPostImage};
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let mut stmt = posts::table.into_boxed();

        if !query.include_rented {
            stmt = stmt.filter(posts::is_rented.eq(false));
        }
        if let Some(category_id) = query.category_id {
            stmt = stmt.filter(posts::category_id.eq(category_id));
        }
        if let Some(min) = query.price_min {
            stmt = stmt.filter(posts::price.ge(min));
        }
        if let Some(max) = query.price_max {
            stmt = stmt.filter(posts::price.le(max));
        }
        if let Some(term) = &query.location {
            let pattern = format!("%{term}%");
            stmt = stmt.filter(
                posts::address
                    .like(pattern.clone())
                    .or(posts::location.like(pattern)),
            );
        }
        if let Some(min_bedroom) = query.min_bedroom {
            stmt = stmt.filter(posts::bedroom.ge(min_bedroom));
        }
        if let Some(user_id) = query.user_id {
            stmt = stmt.filter(posts::user_id.eq(user_id));
        }

        let db_posts = stmt
            .order(posts::upload_date.desc())
            .then_order_by(posts::id.desc())
            .load::<DbPost>(&mut conn)?;

        let images = DbPostImage::belonging_to(&db_posts)
            .load::<DbPostImage>(&mut conn)?
            .grouped_by(&db_posts);

        Ok(db_posts
            .into_iter()
            .zip(images)
            .map(|(post, images)| post.into_domain(images))
            .collect())
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, new_post: &NewPost, images: &[String]) -> RepositoryResult<Post> {
        use crate::models::post::{
            NewPost as DbNewPost, NewPostImage as DbNewPostImage, Post as DbPost,
            PostImage as DbPostImage,
        };
        use crate::schema::{post_images, posts};

        let mut conn = self.conn()?;
        conn.transaction::<Post, RepositoryError, _>(|conn| {
            let insertable: DbNewPost = new_post.into();
            let post = diesel::insert_into(posts::table)
                .values(&insertable)
                .get_result::<DbPost>(conn)?;

            let image_rows: Vec<DbNewPostImage> = images
                .iter()
                .map(|base_url| DbNewPostImage {
                    post_id: post.id,
                    base_url,
                })
                .collect();
            diesel::insert_into(post_images::table)
                .values(&image_rows)
                .execute(conn)?;

            let images = DbPostImage::belonging_to(&post).load::<DbPostImage>(conn)?;
            Ok(post.into_domain(images))
        })
    }

    fn update_post(&self, post_id: i32, updates: &UpdatePost) -> RepositoryResult<Post> {
        use crate::models::post::{
            Post as DbPost, PostImage as DbPostImage, UpdatePost as DbUpdatePost,
        };
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let db_updates: DbUpdatePost = updates.into();

        let updated = diesel::update(posts::table.find(post_id))
            .set(&db_updates)
            .get_result::<DbPost>(&mut conn)?;

        let images = DbPostImage::belonging_to(&updated).load::<DbPostImage>(&mut conn)?;
        Ok(updated.into_domain(images))
    }

    fn set_post_rented(&self, post_id: i32, rented: bool) -> RepositoryResult<Post> {
        use crate::models::post::{Post as DbPost, PostImage as DbPostImage};
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let updated = diesel::update(posts::table.find(post_id))
            .set(posts::is_rented.eq(rented))
            .get_result::<DbPost>(&mut conn)?;

        let images = DbPostImage::belonging_to(&updated).load::<DbPostImage>(&mut conn)?;
        Ok(updated.into_domain(images))
    }

    fn delete_post(&self, post_id: i32) -> RepositoryResult<()> {
        use crate::schema::{comments, post_images, posts};

        let mut conn = self.conn()?;
        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(post_images::table.filter(post_images::post_id.eq(post_id)))
                .execute(conn)?;
            diesel::delete(comments::table.filter(comments::post_id.eq(post_id))).execute(conn)?;
            diesel::delete(posts::table.find(post_id)).execute(conn)?;
            Ok(())
        })
    }
}
