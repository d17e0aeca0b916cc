//! Uniform success/failure envelope returned by every store operation.
//!
//! Callers must match on [`Outcome`] before touching the payload or the
//! message. The [`Status`] classification maps one-to-one onto an HTTP
//! status code so the transport layer never re-derives business rules.

use crate::error::CoreError;

/// Classification attached to every outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Created,
    Ok,
    NoContent,
    BadRequest,
    NotFound,
    InternalError,
}

impl Status {
    /// HTTP status code this classification projects onto.
    pub fn code(self) -> u16 {
        match self {
            Status::Created => 201,
            Status::Ok => 200,
            Status::NoContent => 204,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::InternalError => 500,
        }
    }

    /// Stable machine-readable name, used as the `code` field of error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Created => "CREATED",
            Status::Ok => "OK",
            Status::NoContent => "NO_CONTENT",
            Status::BadRequest => "BAD_REQUEST",
            Status::NotFound => "NOT_FOUND",
            Status::InternalError => "INTERNAL_ERROR",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::Created | Status::Ok | Status::NoContent)
    }
}

impl From<&CoreError> for Status {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Validation(_) => Status::BadRequest,
            CoreError::NotFound { .. } => Status::NotFound,
            CoreError::Internal(_) => Status::InternalError,
        }
    }
}

/// Result of a store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The operation succeeded. `payload` is `None` for e.g. deletion.
    Success { status: Status, payload: Option<T> },
    /// The operation failed with a classification and optional diagnostic.
    Failure {
        status: Status,
        message: Option<String>,
    },
}

impl<T> Outcome<T> {
    pub fn created(payload: T) -> Self {
        Outcome::Success {
            status: Status::Created,
            payload: Some(payload),
        }
    }

    pub fn ok(payload: T) -> Self {
        Outcome::Success {
            status: Status::Ok,
            payload: Some(payload),
        }
    }

    pub fn no_content() -> Self {
        Outcome::Success {
            status: Status::NoContent,
            payload: None,
        }
    }

    /// Build a failure. `status` must be a failure class.
    pub fn failure(status: Status, message: impl Into<String>) -> Self {
        debug_assert!(!status.is_success(), "failure built with {status:?}");
        Outcome::Failure {
            status,
            message: Some(message.into()),
        }
    }

    /// Whether the classification agrees with the variant.
    ///
    /// The variants are public, so a `Success` carrying `NotFound` (or a
    /// `Failure` carrying `Ok`) can be written by hand; such values are
    /// inconsistent.
    pub fn is_consistent(&self) -> bool {
        self.status().is_success() == self.is_success()
    }

    pub fn status(&self) -> Status {
        match self {
            Outcome::Success { status, .. } | Outcome::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Payload of a success, `None` for failures and empty successes.
    pub fn payload(&self) -> Option<&T> {
        match self {
            Outcome::Success { payload, .. } => payload.as_ref(),
            Outcome::Failure { .. } => None,
        }
    }

    /// Diagnostic message of a failure, `None` for successes.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Failure { message, .. } => message.as_deref(),
            Outcome::Success { .. } => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success { status, payload } => Outcome::Success {
                status,
                payload: payload.map(f),
            },
            Outcome::Failure { status, message } => Outcome::Failure { status, message },
        }
    }

    /// Convert into a standard `Result`, splitting on the variant.
    pub fn into_result(self) -> Result<Option<T>, (Status, Option<String>)> {
        match self {
            Outcome::Success { payload, .. } => Ok(payload),
            Outcome::Failure { status, message } => Err((status, message)),
        }
    }
}

impl<T> From<CoreError> for Outcome<T> {
    fn from(err: CoreError) -> Self {
        Outcome::failure(Status::from(&err), err.to_string())
    }
}
