use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Form data for submitting site feedback.
pub struct FeedbackForm {
    #[validate(length(min = 1))]
    pub content: String,
}
