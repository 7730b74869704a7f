//! Artist business logic - listing, search, detail and mutations for artists.
//!
//! Mirrors the venue module; shows on an artist page are described by their venue.

use crate::{
    core::{
        SearchResults, name_contains,
        format::{DateStyle, format_datetime},
        show::{partition_by_time, upcoming_show_counts},
    },
    entities::{Artist, Genres, Show, Venue, artist, show},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Validated field set for creating or overwriting an artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInput {
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Image URL
    pub image_link: Option<String>,
    /// Facebook page URL
    pub facebook_link: Option<String>,
    /// Website URL
    pub website_link: Option<String>,
    /// Genres in submission order
    pub genres: Genres,
    /// Whether the artist is looking for venues
    pub seeking_venue: bool,
    /// What the venue or artist is looking for
    pub seeking_description: Option<String>,
}

impl ArtistInput {
    /// Writes every field onto `model`, replacing whatever was there.
    pub(crate) fn apply(self, model: &mut artist::ActiveModel) {
        model.name = Set(self.name);
        model.city = Set(self.city);
        model.state = Set(self.state);
        model.phone = Set(self.phone);
        model.image_link = Set(self.image_link);
        model.facebook_link = Set(self.facebook_link);
        model.website_link = Set(self.website_link);
        model.genres = Set(self.genres);
        model.seeking_venue = Set(self.seeking_venue);
        model.seeking_description = Set(self.seeking_description.filter(|_| self.seeking_venue));
    }
}

/// An artist in the plain artist listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistListing {
    /// Record ID
    pub id: i64,
    /// Display name
    pub name: String,
}

/// An artist in search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    /// Record ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Shows starting after now
    pub num_upcoming_shows: u64,
}

/// A show on an artist page, described by its venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistShow {
    /// ID of the hosting venue
    pub venue_id: i64,
    /// Name of the hosting venue
    pub venue_name: String,
    /// Image URL of the hosting venue
    pub venue_image_link: Option<String>,
    /// When the show starts
    pub start_time: String,
}

/// Everything the artist page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    /// The artist record
    pub artist: artist::Model,
    /// Shows that already started
    pub past_shows: Vec<ArtistShow>,
    /// Shows starting after now
    pub upcoming_shows: Vec<ArtistShow>,
    /// Number of past shows
    pub past_shows_count: usize,
    /// Number of upcoming shows
    pub upcoming_shows_count: usize,
}

/// Finds an artist by ID.
pub async fn get_artist_by_id(
    db: &DatabaseConnection,
    artist_id: i64,
) -> Result<Option<artist::Model>> {
    Artist::find_by_id(artist_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an artist by ID, failing with [`Error::ArtistNotFound`] when it does not exist.
pub async fn require_artist(db: &DatabaseConnection, artist_id: i64) -> Result<artist::Model> {
    get_artist_by_id(db, artist_id)
        .await?
        .ok_or(Error::ArtistNotFound { id: artist_id })
}

/// Lists every artist by name.
pub async fn list_artists(db: &DatabaseConnection) -> Result<Vec<ArtistListing>> {
    let rows: Vec<(i64, String)> = Artist::find()
        .select_only()
        .column(artist::Column::Id)
        .column(artist::Column::Name)
        .order_by_asc(artist::Column::Name)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistListing { id, name })
        .collect())
}

/// Searches artists whose name contains `term`, ignoring case.
pub async fn search_artists(
    db: &DatabaseConnection,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults<ArtistSummary>> {
    let artists = Artist::find()
        .filter(name_contains(artist::Column::Name, term))
        .order_by_asc(artist::Column::Name)
        .all(db)
        .await?;
    let counts = upcoming_show_counts(db, show::Column::ArtistId, now).await?;

    Ok(artists
        .into_iter()
        .map(|artist| ArtistSummary {
            num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or_default(),
            id: artist.id,
            name: artist.name,
        })
        .collect::<Vec<_>>()
        .into())
}

/// Builds the artist page with every past and upcoming show.
pub async fn get_artist_detail(
    db: &DatabaseConnection,
    artist_id: i64,
    now: DateTime<Utc>,
) -> Result<ArtistDetail> {
    let artist = require_artist(db, artist_id).await?;

    let shows = Show::find()
        .filter(show::Column::ArtistId.eq(artist_id))
        .find_also_related(Venue)
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?;

    let entries = shows
        .into_iter()
        .filter_map(|(show, venue)| {
            let venue = venue?;
            Some((
                show.start_time,
                ArtistShow {
                    venue_id: venue.id,
                    venue_name: venue.name,
                    venue_image_link: venue.image_link,
                    start_time: format_datetime(show.start_time, DateStyle::Full),
                },
            ))
        })
        .collect();
    let (past_shows, upcoming_shows) = partition_by_time(entries, now);

    Ok(ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Inserts a new artist.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_artist(db: &DatabaseConnection, input: ArtistInput) -> Result<artist::Model> {
    let txn = db.begin().await?;

    let mut model = artist::ActiveModel {
        ..Default::default()
    };
    input.apply(&mut model);
    let artist = model.insert(&txn).await?;

    txn.commit().await?;
    info!(artist_id = artist.id, "Artist listed");
    Ok(artist)
}

/// Overwrites every field of an existing artist.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn update_artist(
    db: &DatabaseConnection,
    artist_id: i64,
    input: ArtistInput,
) -> Result<artist::Model> {
    let txn = db.begin().await?;

    let existing = Artist::find_by_id(artist_id)
        .one(&txn)
        .await?
        .ok_or(Error::ArtistNotFound { id: artist_id })?;

    let mut model: artist::ActiveModel = existing.into();
    input.apply(&mut model);
    let artist = model.update(&txn).await?;

    txn.commit().await?;
    info!(artist_id, "Artist updated");
    Ok(artist)
}
