//! Shared test utilities for Fyyur.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        artist::{self, ArtistInput},
        show::{self, ShowInput},
        venue::{self, VenueInput},
    },
    entities::{self, Genres},
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Venue input with every field filled in.
///
/// # Defaults
/// * city/state: San Francisco, CA
/// * genres: Jazz, Reggae, Swing
/// * `seeking_talent`: true
pub fn sample_venue_input(name: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        image_link: Some("https://images.example.com/venue.jpg".to_string()),
        facebook_link: Some("https://www.facebook.com/venue".to_string()),
        website_link: Some("https://www.venue.example.com".to_string()),
        genres: Genres(vec![
            "Jazz".to_string(),
            "Reggae".to_string(),
            "Swing".to_string(),
        ]),
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist.".to_string()),
    }
}

/// Artist input with every field filled in.
pub fn sample_artist_input(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        image_link: Some("https://images.example.com/artist.jpg".to_string()),
        facebook_link: Some("https://www.facebook.com/artist".to_string()),
        website_link: Some("https://www.artist.example.com".to_string()),
        genres: Genres(vec!["Rock n Roll".to_string()]),
        seeking_venue: true,
        seeking_description: Some("Looking for shows in the Bay Area!".to_string()),
    }
}

/// Creates a test venue from [`sample_venue_input`].
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::venue::Model> {
    venue::create_venue(db, sample_venue_input(name)).await
}

/// Creates a test venue in a specific city and state.
pub async fn create_custom_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> Result<entities::venue::Model> {
    let mut input = sample_venue_input(name);
    input.city = city.to_string();
    input.state = state.to_string();
    venue::create_venue(db, input).await
}

/// Creates a test artist from [`sample_artist_input`].
pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::artist::Model> {
    artist::create_artist(db, sample_artist_input(name)).await
}

/// Creates a show for the given artist and venue.
pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i64,
    venue_id: i64,
    start_time: DateTime<Utc>,
) -> Result<entities::show::Model> {
    show::create_show(
        db,
        ShowInput {
            artist_id,
            venue_id,
            start_time,
        },
    )
    .await
}

/// Sets up a complete test environment with one venue and one artist.
/// Returns (db, venue, artist) for show-related tests.
pub async fn setup_with_venue_and_artist() -> Result<(
    DatabaseConnection,
    entities::venue::Model,
    entities::artist::Model,
)> {
    let db = setup_test_db().await?;
    let venue = create_test_venue(&db, "The Musical Hop").await?;
    let artist = create_test_artist(&db, "Guns N Petals").await?;
    Ok((db, venue, artist))
}
