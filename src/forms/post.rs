use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use serde::Deserialize;
use validator::Validate;

use crate::domain::post::{NewPost, UpdatePost};
use crate::forms::FormError;

/// Maximum number of photos accepted per listing.
pub const MAX_LISTING_IMAGES: usize = 5;

#[derive(MultipartForm)]
/// Multipart form data for creating a listing.
pub struct AddPostForm {
    #[multipart(limit = "10MB")]
    pub images: Vec<TempFile>,
    pub category_id: Text<i32>,
    pub price: Text<i64>,
    pub area: Text<i32>,
    pub bedroom: Text<i32>,
    pub address: Text<String>,
    /// Pinned map location as `lat,lon`.
    pub location: Text<String>,
    pub content: Text<String>,
}

impl AddPostForm {
    /// Multipart forms cannot use the `Validate` derive, so the checks live
    /// here. A listing needs at least one image and a pinned location.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.images.is_empty() || self.images.len() > MAX_LISTING_IMAGES {
            return Err(FormError::InvalidImageCount);
        }
        if self.location.trim().is_empty() {
            return Err(FormError::MissingLocation);
        }
        if self.address.trim().is_empty() {
            return Err(FormError::MissingAddress);
        }
        if self.content.trim().is_empty() {
            return Err(FormError::MissingContent);
        }
        if *self.price <= 0 {
            return Err(FormError::InvalidPrice);
        }
        if *self.area <= 0 {
            return Err(FormError::InvalidArea);
        }
        if *self.bedroom < 0 {
            return Err(FormError::InvalidBedroomCount);
        }
        Ok(())
    }

    /// Builds the domain payload for the authenticated owner.
    pub fn to_new_post(&self, user_id: i32) -> NewPost {
        NewPost::new(
            user_id,
            *self.category_id,
            *self.price,
            self.address.as_str(),
            self.location.as_str(),
            *self.bedroom,
            *self.area,
            self.content.as_str(),
        )
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing listing. Images are kept as-is.
pub struct UpdatePostForm {
    pub category_id: i32,
    #[validate(range(min = 1))]
    pub price: i64,
    #[validate(range(min = 1))]
    pub area: i32,
    #[validate(range(min = 0))]
    pub bedroom: i32,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub content: String,
}

impl From<&UpdatePostForm> for UpdatePost {
    fn from(form: &UpdatePostForm) -> Self {
        UpdatePost::new(
            form.category_id,
            form.price,
            form.address.as_str(),
            form.location.as_str(),
            form.bedroom,
            form.area,
            form.content.as_str(),
        )
    }
}
