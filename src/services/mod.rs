//! Service layer: validation, authorization, and orchestration between
//! routes and the repository.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod auth;
pub mod comment;
pub mod feedback;
pub mod main;
pub mod post;
pub mod search;
pub mod stats;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    /// A user-facing message, flashed back to the form.
    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
