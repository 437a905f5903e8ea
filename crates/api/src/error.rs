use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cms_core::error::CoreError;
use cms_db::repositories::RepositoryError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] so handlers can return `AppResult<T>` and let
/// `?` pick the status code:
///
/// | Variant                      | Status | Body               |
/// |------------------------------|--------|--------------------|
/// | `Core(NotFound)`             | 404    | empty              |
/// | `BadRequest`                 | 400    | empty              |
/// | `Core(UnknownCourseType)`    | 500    | error text         |
/// | `Repository`                 | 500    | error text         |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cms_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the repository.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The request was valid when checked but could not be carried out.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::BadRequest(reason) => {
                tracing::warn!(%reason, "Bad request");
                StatusCode::BAD_REQUEST.into_response()
            }
            other => {
                let message = other.to_string();
                tracing::error!(error = %message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
