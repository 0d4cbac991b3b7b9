//! Typed error for HTTP handlers.
//!
//! The single boundary where storage and input failures become status codes.
//! No failure inside a request ever takes the process down.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use webshelf_core::CoreError;
use webshelf_storage::StorageError;

use crate::templates::escape;

/// Handler error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — malformed id, page or form input.
    BadRequest(String),
    /// 404 Not Found — no book with the requested id.
    NotFound(String),
    /// 500 Internal Server Error — storage failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => {
                tracing::debug!(%status, %msg, "request rejected");
                msg
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                "internal server error".to_owned()
            },
        };
        let body = format!(r#"<p class="error" role="alert">{}</p>"#, escape(&message));
        (status, Html(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            other => Self::Internal(other.into()),
        }
    }
}
