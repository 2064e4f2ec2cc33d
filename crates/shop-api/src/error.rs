//! Domain error to HTTP response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use shop_core::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::Unauthorized(_) => ApiError::Forbidden(message),
            DomainError::StoreNotFound
            | DomainError::PageNotFound(_)
            | DomainError::NavItemNotFound(_) => ApiError::NotFound(message),
            DomainError::PageAlreadyLinked(_) => ApiError::Conflict(message),
            DomainError::ValidationError(_) => ApiError::BadRequest(message),
            DomainError::DatabaseError(detail) => {
                tracing::error!("Database error: {}", detail);
                ApiError::InternalError("Storage is unavailable, please retry".to_string())
            }
            DomainError::InternalError(detail) => {
                tracing::error!("Internal error: {}", detail);
                ApiError::InternalError("Something went wrong, please retry".to_string())
            }
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::BadRequest(_) => "VALIDATION_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::warn!("{} ({}): {}", self.code(), status, self);
        }
        let body = Json(ApiResponse::<()>::error(self.code(), &self.to_string()));
        (status, body).into_response()
    }
}
