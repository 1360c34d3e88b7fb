//! Comment submission and moderation.

use validator::Validate;

use crate::ADMIN_ROLE;
use crate::domain::comment::NewComment;
use crate::dto::comment::CommentRow;
use crate::forms::comment::AddCommentForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CommentReader, CommentWriter, PostReader};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Attaches a rated comment to a listing.
pub fn add_comment<R>(
    repo: &R,
    user: &AuthenticatedUser,
    post_id: i32,
    form: &AddCommentForm,
) -> ServiceResult<()>
where
    R: PostReader + CommentWriter + ?Sized,
{
    let user_id = user.user_id().ok_or(ServiceError::Unauthorized)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate comment form: {err}");
        return Err(ServiceError::Form(
            "Provide a comment and a rating between 1 and 5.".to_string(),
        ));
    }

    repo.get_post_by_id(post_id)?
        .ok_or(ServiceError::NotFound)?;

    let new_comment = NewComment::new(post_id, user_id, &form.content, form.rating)?;
    repo.create_comment(&new_comment)?;

    Ok(())
}

/// The full moderation table, admins only.
pub fn list_comments<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<CommentRow>>
where
    R: CommentReader + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let rows = repo
        .list_all_comments()?
        .into_iter()
        .map(|(comment, author, post)| CommentRow {
            id: comment.id,
            author: author.full_name,
            listing: post.address,
            rating: comment.rating,
            content: comment.content,
            submitted: comment.submit_date.format("%b %d, %Y").to_string(),
        })
        .collect();

    Ok(rows)
}

/// Removes a comment, admins only.
pub fn delete_comment<R>(
    repo: &R,
    user: &AuthenticatedUser,
    comment_id: i32,
) -> ServiceResult<()>
where
    R: CommentWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_comment(comment_id)?;
    Ok(())
}
