/**
 * Backend Error Types
 *
 * `AuthError` covers every way a caller can fail to prove who they are.
 * `ApiError` is what handlers return; it maps one-to-one onto an HTTP status
 * and a stable `kind` string.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Result alias used by handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Authentication failures
///
/// The token service only ever produces `Malformed`, `InvalidSignature` and
/// `Expired`; `MissingToken` comes from the middleware and
/// `InvalidCredentials` from the login handler.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,
    #[error("malformed token")]
    Malformed,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl AuthError {
    /// Stable identifier carried in the response body
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken => "MissingToken",
            Self::Malformed => "MalformedToken",
            Self::InvalidSignature => "InvalidSignature",
            Self::Expired => "TokenExpired",
            Self::InvalidCredentials => "InvalidCredentials",
        }
    }
}

/// Errors returned from HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request fields
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Missing/invalid/expired token or bad credentials
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Authenticated, but not allowed to touch the target resource
    #[error("{0}")]
    Forbidden(String),

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation
    #[error("{0}")]
    Conflict(String),

    /// Storage or crypto failure; detail is logged, never rendered
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(SharedError::validation(field, message))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable identifier carried in the response body
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Auth(err) => err.kind(),
            Self::Forbidden(_) => "Forbidden",
            Self::NotFound(_) => "NotFound",
            Self::Conflict(_) => "Conflict",
            Self::Internal => "Internal",
        }
    }

    /// Human-readable message rendered as `error`
    pub fn message(&self) -> String {
        self.to_string()
    }
}
