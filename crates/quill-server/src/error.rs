use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use quill_blog::BlogError;
use quill_store::StoreError;

use crate::views::{self, ViewEngine};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("blog error: {0}")]
    Blog(#[from] BlogError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Error wrapper for the HTML page routes.
///
/// The top-level conversion of repository failures into pages: malformed or
/// unmatched identifiers become the 404 page, an unknown author on create
/// becomes a 422 page, and everything else becomes the generic 500 page
/// with the underlying error logged for operators.
#[derive(Debug)]
pub struct PageError(ServerError);

impl<E: Into<ServerError>> From<E> for PageError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let pages = views::BasicViews;
        match self.0 {
            ServerError::Blog(BlogError::InvalidIdentifier(_))
            | ServerError::Blog(BlogError::NotFound) => {
                (StatusCode::NOT_FOUND, Html(pages.not_found())).into_response()
            }
            ServerError::Blog(BlogError::UnknownAuthor(id)) => {
                tracing::warn!(author = %id, "post creation referenced a missing author");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Html(pages.rejection("The selected author does not exist.")),
                )
                    .into_response()
            }
            err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(pages.internal_error()),
                )
                    .into_response()
            }
        }
    }
}

/// Error wrapper for the comments JSON routes: `{"message": …}` bodies,
/// 404 for identifiers that cannot address anything, 500 otherwise.
#[derive(Debug)]
pub struct ApiError(ServerError);

impl<E: Into<ServerError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServerError::Blog(BlogError::InvalidIdentifier(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "comments api request failed");
        }
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}
