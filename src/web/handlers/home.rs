//! `GET /`

use crate::web::render;
use axum::response::Html;

/// `GET /`
pub async fn index() -> Html<String> {
    Html(render::home(None))
}
