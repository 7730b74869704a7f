//! Web layer - axum router, request handlers and HTML rendering.
//!
//! Handlers parse the request, call into [`crate::core`] with the injected
//! database connection and hand the resulting plain data to [`render`].

/// Error-to-response mapping for pages and form submissions
pub mod error;
/// Route handlers grouped by resource
pub mod handlers;
/// HTML page rendering
pub mod render;

use axum::{
    Router,
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (pooled) for all database operations
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Wraps `db` so every handler shares the one connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}

/// Builds the application router with every route and the request trace layer.
pub fn build_router(state: AppState) -> Router {
    use handlers::{artists, health, home, shows, venues};

    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health_check))
        // Venues
        .route("/venues", get(venues::list))
        .route("/venues/search", post(venues::search))
        .route(
            "/venues/create",
            get(venues::create_form).post(venues::create_submission),
        )
        .route("/venues/{id}", get(venues::detail))
        .route(
            "/venues/{id}/edit",
            get(venues::edit_form).post(venues::edit_submission),
        )
        .route("/venues/{id}/delete", delete(venues::delete))
        // Artists
        .route("/artists", get(artists::list))
        .route("/artists/search", post(artists::search))
        .route(
            "/artists/create",
            get(artists::create_form).post(artists::create_submission),
        )
        .route("/artists/{id}", get(artists::detail))
        .route(
            "/artists/{id}/edit",
            get(artists::edit_form).post(artists::edit_submission),
        )
        // Shows
        .route("/shows", get(shows::list))
        .route(
            "/shows/create",
            get(shows::create_form).post(shows::create_submission),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
