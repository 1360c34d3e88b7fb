use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Form data for commenting on a listing.
pub struct AddCommentForm {
    /// Comment text content.
    #[validate(length(min = 1))]
    pub content: String,
    /// Star rating between 1 and 5.
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}
