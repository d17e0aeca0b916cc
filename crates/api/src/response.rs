//! Response envelope for API handlers.
//!
//! Every store [`Outcome`] is projected onto HTTP through [`Envelope`]:
//!
//! - success: `{ "success": true, "result": ... }` (`result` omitted when
//!   there is no payload; `204 No Content` has no body at all)
//! - failure: `{ "success": false, "error": "...", "code": "NOT_FOUND" }`
//!
//! The HTTP status code comes straight from [`Status::code`]. An outcome
//! whose classification contradicts its variant renders as a `500` failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tierlist_core::outcome::{Outcome, Status};

/// Message shown to clients in place of internal error details.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Wraps an [`Outcome`] so it can be returned from a handler.
#[derive(Debug)]
pub struct Envelope<T>(pub Outcome<T>);

impl<T> From<Outcome<T>> for Envelope<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Envelope(outcome)
    }
}

#[derive(Debug, Serialize)]
struct SuccessBody<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
}

#[derive(Debug, Serialize)]
struct FailureBody {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    code: &'static str,
}

/// Project a classification onto an HTTP status code.
pub fn http_status(status: Status) -> StatusCode {
    StatusCode::from_u16(status.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        if !self.0.is_consistent() {
            tracing::error!(
                status = ?self.0.status(),
                success = self.0.is_success(),
                "Outcome classification disagrees with its variant"
            );
            return Envelope(Outcome::<()>::Failure {
                status: Status::InternalError,
                message: None,
            })
            .into_response();
        }

        match self.0 {
            Outcome::Success {
                status: Status::NoContent,
                ..
            } => StatusCode::NO_CONTENT.into_response(),
            Outcome::Success { status, payload } => (
                http_status(status),
                Json(SuccessBody {
                    success: true,
                    result: payload,
                }),
            )
                .into_response(),
            Outcome::Failure { status, message } => {
                let error = if status == Status::InternalError {
                    tracing::error!(error = ?message, "Internal error");
                    Some(INTERNAL_ERROR_MESSAGE.to_string())
                } else {
                    message
                };
                (
                    http_status(status),
                    Json(FailureBody {
                        success: false,
                        error,
                        code: status.as_str(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
