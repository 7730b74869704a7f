//! Route handlers, one module per resource.

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use super::render;
use crate::errors::Error;
use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use axum_extra::extract::FormRejection;

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render::errors::not_found()))
}

/// A body that could not be decoded into the expected form, usually because a
/// field is missing.
pub(crate) fn rejected_form(rejection: &FormRejection) -> Error {
    Error::validation("form", rejection.to_string())
}

/// A path segment that should have been a numeric ID.
pub(crate) fn rejected_path(rejection: &PathRejection) -> Error {
    Error::validation("id", rejection.body_text())
}
