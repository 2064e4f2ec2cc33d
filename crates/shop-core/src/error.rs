//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Store not found")]
    StoreNotFound,

    #[error("Not allowed to edit store {0}")]
    Unauthorized(Uuid),

    #[error("Page not found: {0}")]
    PageNotFound(Uuid),

    #[error("This page is already in the navigation")]
    PageAlreadyLinked(Uuid),

    #[error("Navigation item not found: {0}")]
    NavItemNotFound(Uuid),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
