//! Site feedback submission and review.

use validator::Validate;

use crate::ADMIN_ROLE;
use crate::domain::feedback::{Feedback, NewFeedback};
use crate::forms::feedback::FeedbackForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{FeedbackReader, FeedbackWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Stores a feedback submission. Open to unauthenticated visitors.
pub fn submit_feedback<R>(repo: &R, form: &FeedbackForm) -> ServiceResult<()>
where
    R: FeedbackWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate feedback form: {err}");
        return Err(ServiceError::Form("Feedback cannot be empty.".to_string()));
    }

    let new_feedback = NewFeedback::new(&form.content)?;
    repo.create_feedback(&new_feedback)?;
    Ok(())
}

/// All feedback entries, newest first, admins only.
pub fn list_feedbacks<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Feedback>>
where
    R: FeedbackReader + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.list_feedbacks().map_err(Into::into)
}
