//! Show business logic - listing and creating shows.
//!
//! Shows are the join between artists and venues. This module also holds the
//! "upcoming" counting shared by the venue and artist listings.

use crate::{
    core::format::{DateStyle, format_datetime},
    entities::{Artist, Show, Venue, show},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*, sea_query::Expr};
use std::collections::HashMap;
use tracing::{info, instrument};

/// Validated input for a new show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInput {
    /// ID of the performing artist
    pub artist_id: i64,
    /// ID of the hosting venue
    pub venue_id: i64,
    /// When the show starts
    pub start_time: DateTime<Utc>,
}

/// One row of the show listing, flattened with venue and artist names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    /// ID of the hosting venue
    pub venue_id: i64,
    /// Name of the hosting venue
    pub venue_name: String,
    /// ID of the performing artist
    pub artist_id: i64,
    /// Name of the performing artist
    pub artist_name: String,
    /// Image URL of the performing artist
    pub artist_image_link: Option<String>,
    /// Start time formatted for display
    pub start_time: String,
}

/// Lists every show with its venue and artist, earliest first.
///
/// Two extra queries fetch the venues and artists referenced by the shows, so the
/// cost does not grow with the number of shows.
pub async fn list_shows(db: &DatabaseConnection) -> Result<Vec<ShowListing>> {
    let shows = Show::find()
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?;

    let venues: HashMap<i64, _> = Venue::find()
        .all(db)
        .await?
        .into_iter()
        .map(|venue| (venue.id, venue))
        .collect();
    let artists: HashMap<i64, _> = Artist::find()
        .all(db)
        .await?
        .into_iter()
        .map(|artist| (artist.id, artist))
        .collect();

    Ok(shows
        .into_iter()
        .filter_map(|show| {
            let venue = venues.get(&show.venue_id)?;
            let artist = artists.get(&show.artist_id)?;
            Some(ShowListing {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: format_datetime(show.start_time, DateStyle::Medium),
            })
        })
        .collect())
}

/// Creates a show after checking that both its artist and venue exist.
///
/// # Errors
/// Returns [`Error::ArtistNotFound`] or [`Error::VenueNotFound`] for dangling
/// references, or a database error if the insert fails.
#[instrument(skip(db))]
pub async fn create_show(db: &DatabaseConnection, input: ShowInput) -> Result<show::Model> {
    let txn = db.begin().await?;

    if Artist::find_by_id(input.artist_id).one(&txn).await?.is_none() {
        return Err(Error::ArtistNotFound {
            id: input.artist_id,
        });
    }
    if Venue::find_by_id(input.venue_id).one(&txn).await?.is_none() {
        return Err(Error::VenueNotFound {
            id: input.venue_id,
        });
    }

    let show = show::ActiveModel {
        artist_id: Set(input.artist_id),
        venue_id: Set(input.venue_id),
        start_time: Set(input.start_time),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    info!(show_id = show.id, "Show listed");
    Ok(show)
}

/// Counts shows starting strictly after `now`, grouped by `owner` (the venue or
/// artist foreign key column).
///
/// Owners without upcoming shows are absent from the map.
pub(crate) async fn upcoming_show_counts(
    db: &DatabaseConnection,
    owner: show::Column,
    now: DateTime<Utc>,
) -> Result<HashMap<i64, u64>> {
    let rows: Vec<(i64, i64)> = Show::find()
        .select_only()
        .column(owner)
        .column_as(Expr::col(show::Column::Id).count(), "upcoming")
        .filter(show::Column::StartTime.gt(now))
        .group_by(owner)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, count)| (id, u64::try_from(count).unwrap_or_default()))
        .collect())
}

/// Splits `shows` into (past, upcoming) relative to `now`.
///
/// A show starting exactly at `now` is in neither list.
pub(crate) fn partition_by_time<T>(
    shows: Vec<(DateTime<Utc>, T)>,
    now: DateTime<Utc>,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for (start_time, item) in shows {
        match start_time.cmp(&now) {
            std::cmp::Ordering::Less => past.push(item),
            std::cmp::Ordering::Greater => upcoming.push(item),
            std::cmp::Ordering::Equal => {}
        }
    }
    (past, upcoming)
}
