use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use tierlist_core::error::CoreError;
use tierlist_core::outcome::{Outcome, Status};

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Covers failures that happen before the store is reached, such as a
/// malformed JSON body or an id that is not a UUID. Renders through the
/// same failure envelope as store outcomes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tierlist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected path parameters");
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<AppError> for Outcome<()> {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Core(core) => core.into(),
            AppError::BadRequest(msg) => Outcome::failure(Status::BadRequest, msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Envelope(Outcome::<()>::from(self)).into_response()
    }
}
