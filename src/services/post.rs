//! Listing lifecycle: create, show, edit, rent-toggle, delete.

use std::path::Path;

use actix_multipart::form::tempfile::TempFile;
use uuid::Uuid;
use validator::Validate;

use crate::ADMIN_ROLE;
use crate::domain::post::Post;
use crate::dto::comment::CommentView;
use crate::dto::post::{ComposePageData, MyListingsPageData, PostCard, PostPageData};
use crate::forms::post::{AddPostForm, UpdatePostForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{
    CategoryReader, CommentReader, PostListQuery, PostReader, PostWriter, UserReader,
};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Validates the listing form, persists the uploaded images, and creates the
/// listing. Returns the new listing id.
pub fn create_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &AddPostForm,
    upload_dir: &str,
) -> ServiceResult<i32>
where
    R: PostWriter + ?Sized,
{
    let user_id = user.user_id().ok_or(ServiceError::Unauthorized)?;

    if let Err(err) = form.validate() {
        return Err(ServiceError::Form(err.to_string()));
    }

    let images = store_images(&form.images, upload_dir)?;
    let new_post = form.to_new_post(user_id);
    let post = repo.create_post(&new_post, &images)?;

    Ok(post.id)
}

/// Copies uploaded temp files into the upload directory under fresh UUID
/// names, returning the stored file names.
fn store_images(images: &[TempFile], upload_dir: &str) -> ServiceResult<Vec<String>> {
    std::fs::create_dir_all(upload_dir)?;

    let mut stored = Vec::with_capacity(images.len());
    for image in images {
        let extension = image
            .file_name
            .as_deref()
            .map(Path::new)
            .and_then(|name| name.extension())
            .and_then(|ext| ext.to_str())
            .unwrap_or("jpg");
        let file_name = format!("{}.{extension}", Uuid::new_v4());
        std::fs::copy(image.file.path(), Path::new(upload_dir).join(&file_name))?;
        stored.push(file_name);
    }

    Ok(stored)
}

/// Loads the listing detail page: the record, its category and owner, and
/// the comment thread.
pub fn load_post_page<R>(repo: &R, post_id: i32) -> ServiceResult<PostPageData>
where
    R: PostReader + CategoryReader + CommentReader + UserReader + ?Sized,
{
    let post = repo
        .get_post_by_id(post_id)?
        .ok_or(ServiceError::NotFound)?;

    let category = repo
        .get_category_by_id(post.category_id)?
        .map(|category| category.name);

    let owner = repo.get_user_by_id(post.user_id)?;
    let (owner_name, owner_phone) = owner
        .map(|owner| (owner.full_name, owner.phone))
        .unwrap_or_default();

    let comments = repo
        .list_post_comments(post_id)?
        .iter()
        .map(|(comment, author)| CommentView::new(comment, author))
        .collect();

    Ok(PostPageData {
        uploaded: post.upload_date.format("%b %d, %Y").to_string(),
        post,
        category,
        owner_name,
        owner_phone,
        comments,
    })
}

/// Loads the category options for the create-listing form.
pub fn load_compose_page<R>(repo: &R) -> ServiceResult<ComposePageData>
where
    R: CategoryReader + ?Sized,
{
    Ok(ComposePageData {
        categories: repo.list_categories()?,
        post: None,
    })
}

/// Loads an existing listing into the edit form, enforcing ownership.
pub fn load_edit_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    post_id: i32,
) -> ServiceResult<ComposePageData>
where
    R: PostReader + CategoryReader + ?Sized,
{
    let post = owned_post(repo, user, post_id)?;
    Ok(ComposePageData {
        categories: repo.list_categories()?,
        post: Some(post),
    })
}

/// Applies the edit form to a listing the user owns.
pub fn update_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    post_id: i32,
    form: &UpdatePostForm,
) -> ServiceResult<()>
where
    R: PostReader + PostWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate listing form: {err}");
        return Err(ServiceError::Form("Please check the listing fields.".to_string()));
    }

    owned_post(repo, user, post_id)?;
    repo.update_post(post_id, &form.into())?;
    Ok(())
}

/// Flips the rented flag on a listing the user owns.
pub fn toggle_rented<R>(repo: &R, user: &AuthenticatedUser, post_id: i32) -> ServiceResult<Post>
where
    R: PostReader + PostWriter + ?Sized,
{
    let post = owned_post(repo, user, post_id)?;
    repo.set_post_rented(post_id, !post.is_rented)
        .map_err(Into::into)
}

/// Deletes a listing the user owns (admins can delete any).
pub fn delete_listing<R>(repo: &R, user: &AuthenticatedUser, post_id: i32) -> ServiceResult<()>
where
    R: PostReader + PostWriter + ?Sized,
{
    owned_post(repo, user, post_id)?;
    repo.delete_post(post_id)?;
    Ok(())
}

/// The owner's listings, rented ones included.
pub fn load_my_listings<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<MyListingsPageData>
where
    R: PostReader + CategoryReader + ?Sized,
{
    let user_id = user.user_id().ok_or(ServiceError::Unauthorized)?;

    let categories = repo.list_categories()?;
    let listings = repo
        .list_posts(PostListQuery::new().owner(user_id).include_rented())?
        .iter()
        .map(|post| PostCard::new(post, &categories))
        .collect();

    Ok(MyListingsPageData { listings })
}

/// Fetches the listing and checks the caller may manage it.
fn owned_post<R>(repo: &R, user: &AuthenticatedUser, post_id: i32) -> ServiceResult<Post>
where
    R: PostReader + ?Sized,
{
    let user_id = user.user_id().ok_or(ServiceError::Unauthorized)?;
    let post = repo
        .get_post_by_id(post_id)?
        .ok_or(ServiceError::NotFound)?;

    if post.user_id != user_id && !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    Ok(post)
}
