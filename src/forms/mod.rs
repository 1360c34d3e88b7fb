//! Form definitions backing the marketplace routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod comment;
pub mod feedback;
pub mod post;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("a listing needs between 1 and 5 images")]
    InvalidImageCount,

    #[error("pin a location on the map")]
    MissingLocation,

    #[error("address cannot be empty")]
    MissingAddress,

    #[error("description cannot be empty")]
    MissingContent,

    #[error("price must be greater than zero")]
    InvalidPrice,

    #[error("area must be greater than zero")]
    InvalidArea,

    #[error("bedroom count cannot be negative")]
    InvalidBedroomCount,
}
