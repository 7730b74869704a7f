//! Error responses.
//!
//! Read routes answer with a 404 page for missing records and a 500 page for
//! anything else. Form submissions answer every failure with 400 and the home
//! page carrying a failure notification.

use super::render::{self, Flash};
use crate::errors::{Error, ErrorKind};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Failure while rendering a page.
#[derive(Debug)]
pub enum PageError {
    /// The path does not name an existing record
    NotFound,
    /// Any other failure, reported by [`Error`]
    Failed(Error),
}

impl From<Error> for PageError {
    fn from(value: Error) -> Self {
        match value.kind() {
            ErrorKind::NotFound => {
                tracing::debug!("{value}");
                Self::NotFound
            }
            _ => Self::Failed(value),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => {
                (StatusCode::NOT_FOUND, Html(render::errors::not_found())).into_response()
            }
            Self::Failed(error) => {
                tracing::error!("Failed to render page: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render::errors::server_error()),
                )
                    .into_response()
            }
        }
    }
}

/// Failure while handling a create, edit or delete submission.
#[derive(Debug)]
pub struct SubmissionError {
    /// Notification shown to the user
    pub message: String,
    /// What went wrong
    pub source: Error,
}

impl SubmissionError {
    /// Pairs the notification text with the error behind it.
    pub fn new(message: impl Into<String>, source: Error) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        match self.source.kind() {
            ErrorKind::Storage | ErrorKind::Config => {
                tracing::error!("Submission failed: {}", self.source);
            }
            ErrorKind::NotFound | ErrorKind::Validation | ErrorKind::Conflict => {
                tracing::warn!("Submission rejected: {}", self.source);
            }
        }
        (
            StatusCode::BAD_REQUEST,
            Html(render::home(Some(&Flash::error(self.message)))),
        )
            .into_response()
    }
}
