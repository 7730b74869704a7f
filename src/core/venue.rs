//! Venue business logic - Handles all venue-related operations.
//!
//! Provides listing grouped by area, name search, the detail view with past and
//! upcoming shows, and the create/update/delete mutations. Mutations run inside a
//! database transaction that is committed only on success; an early return drops
//! the transaction, which rolls it back.

use crate::{
    core::{
        SearchResults, name_contains,
        format::{DateStyle, format_datetime},
        show::{partition_by_time, upcoming_show_counts},
    },
    entities::{Artist, Genres, Show, Venue, show, venue},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument, warn};

/// Validated field set for creating or overwriting a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueInput {
    /// Display name
    pub name: String,
    /// City shared by the venues
    pub city: String,
    /// State shared by the venues
    pub state: String,
    /// Street address
    pub address: String,
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
    /// Whether the venue is looking for artists
    pub seeking_talent: bool,
    /// What the venue or artist is looking for
    pub seeking_description: Option<String>,
}

impl VenueInput {
    /// Writes every field onto `model`, replacing whatever was there.
    pub(crate) fn apply(self, model: &mut venue::ActiveModel) {
        model.name = Set(self.name);
        model.city = Set(self.city);
        model.state = Set(self.state);
        model.address = Set(self.address);
        model.phone = Set(self.phone);
        model.image_link = Set(self.image_link);
        model.facebook_link = Set(self.facebook_link);
        model.website_link = Set(self.website_link);
        model.genres = Set(self.genres);
        model.seeking_talent = Set(self.seeking_talent);
        // Only meaningful while the venue is looking for talent
        model.seeking_description = Set(self.seeking_description.filter(|_| self.seeking_talent));
    }
}

/// A venue as it appears in listings and search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    /// Record ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Shows starting after now
    pub num_upcoming_shows: u64,
}

/// Venues sharing the same city and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// City shared by the venues
    pub city: String,
    /// State shared by the venues
    pub state: String,
    /// Venues in this area, by name
    pub venues: Vec<VenueSummary>,
}

/// A show on a venue page, described by its artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueShow {
    /// ID of the performing artist
    pub artist_id: i64,
    /// Name of the performing artist
    pub artist_name: String,
    /// Image URL of the performing artist
    pub artist_image_link: Option<String>,
    /// Start time formatted for display
    pub start_time: String,
}

/// Everything the venue page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    /// The venue record
    pub venue: venue::Model,
    /// Shows that already started
    pub past_shows: Vec<VenueShow>,
    /// Shows starting after now
    pub upcoming_shows: Vec<VenueShow>,
    /// Number of past shows
    pub past_shows_count: usize,
    /// Number of upcoming shows
    pub upcoming_shows_count: usize,
}

/// Finds a venue by its unique ID.
pub async fn get_venue_by_id(
    db: &DatabaseConnection,
    venue_id: i64,
) -> Result<Option<venue::Model>> {
    Venue::find_by_id(venue_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a venue by ID, failing with [`Error::VenueNotFound`] when it does not exist.
pub async fn require_venue(db: &DatabaseConnection, venue_id: i64) -> Result<venue::Model> {
    get_venue_by_id(db, venue_id)
        .await?
        .ok_or(Error::VenueNotFound { id: venue_id })
}

/// Lists all venues grouped by (city, state) with their upcoming-show counts.
///
/// Areas are ordered by state then city, and venues inside an area by name.
pub async fn list_venue_areas(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<Vec<Area>> {
    let venues = Venue::find()
        .order_by_asc(venue::Column::State)
        .order_by_asc(venue::Column::City)
        .order_by_asc(venue::Column::Name)
        .all(db)
        .await?;
    let counts = upcoming_show_counts(db, show::Column::VenueId, now).await?;

    let mut areas: Vec<Area> = Vec::new();
    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or_default(),
            name: venue.name,
        };
        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(summary);
            }
            _ => areas.push(Area {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }
    Ok(areas)
}

/// Searches venues whose name contains `term`, ignoring case.
///
/// An empty term matches every venue.
pub async fn search_venues(
    db: &DatabaseConnection,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults<VenueSummary>> {
    let venues = Venue::find()
        .filter(name_contains(venue::Column::Name, term))
        .order_by_asc(venue::Column::Name)
        .all(db)
        .await?;
    let counts = upcoming_show_counts(db, show::Column::VenueId, now).await?;

    Ok(venues
        .into_iter()
        .map(|venue| VenueSummary {
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or_default(),
            id: venue.id,
            name: venue.name,
        })
        .collect::<Vec<_>>()
        .into())
}

/// Builds the venue page: the venue itself plus every past and upcoming show.
///
/// An artist playing the venue several times gets one entry per show.
pub async fn get_venue_detail(
    db: &DatabaseConnection,
    venue_id: i64,
    now: DateTime<Utc>,
) -> Result<VenueDetail> {
    let venue = require_venue(db, venue_id).await?;

    let shows = Show::find()
        .filter(show::Column::VenueId.eq(venue_id))
        .find_also_related(Artist)
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?;

    let entries = shows
        .into_iter()
        .filter_map(|(show, artist)| {
            let artist = artist?;
            Some((
                show.start_time,
                VenueShow {
                    artist_id: artist.id,
                    artist_name: artist.name,
                    artist_image_link: artist.image_link,
                    start_time: format_datetime(show.start_time, DateStyle::Full),
                },
            ))
        })
        .collect();
    let (past_shows, upcoming_shows) = partition_by_time(entries, now);

    Ok(VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Inserts a new venue.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_venue(db: &DatabaseConnection, input: VenueInput) -> Result<venue::Model> {
    let txn = db.begin().await?;

    let mut model = venue::ActiveModel {
        ..Default::default()
    };
    input.apply(&mut model);
    let venue = model.insert(&txn).await?;

    txn.commit().await?;
    info!(venue_id = venue.id, "Venue listed");
    Ok(venue)
}

/// Overwrites every field of an existing venue.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn update_venue(
    db: &DatabaseConnection,
    venue_id: i64,
    input: VenueInput,
) -> Result<venue::Model> {
    let txn = db.begin().await?;

    let existing = Venue::find_by_id(venue_id)
        .one(&txn)
        .await?
        .ok_or(Error::VenueNotFound { id: venue_id })?;

    let mut model: venue::ActiveModel = existing.into();
    input.apply(&mut model);
    let venue = model.update(&txn).await?;

    txn.commit().await?;
    info!(venue_id, "Venue updated");
    Ok(venue)
}

/// Deletes a venue that no show references any more.
///
/// # Errors
/// Returns [`Error::VenueHasShows`] while shows still point at the venue, so no
/// show is ever left dangling. Returns [`Error::VenueNotFound`] for an unknown ID.
#[instrument(skip(db))]
pub async fn delete_venue(db: &DatabaseConnection, venue_id: i64) -> Result<venue::Model> {
    let txn = db.begin().await?;

    let venue = Venue::find_by_id(venue_id)
        .one(&txn)
        .await?
        .ok_or(Error::VenueNotFound { id: venue_id })?;

    let count = Show::find()
        .filter(show::Column::VenueId.eq(venue_id))
        .count(&txn)
        .await?;
    if count > 0 {
        warn!(venue_id, count, "Refusing to delete venue with listed shows");
        return Err(Error::VenueHasShows {
            id: venue_id,
            count,
        });
    }

    Venue::delete_by_id(venue_id).exec(&txn).await?;
    txn.commit().await?;
    info!(venue_id, "Venue deleted");
    Ok(venue)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::{Duration, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 1, 18, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_fetch_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let input = sample_venue_input("The Musical Hop");

        let created = create_venue(&db, input.clone()).await?;
        let detail = get_venue_detail(&db, created.id, now()).await?;

        assert_eq!(detail.venue.name, input.name);
        assert_eq!(detail.venue.city, input.city);
        assert_eq!(detail.venue.state, input.state);
        assert_eq!(detail.venue.address, input.address);
        assert_eq!(detail.venue.phone, input.phone);
        assert_eq!(detail.venue.image_link, input.image_link);
        assert_eq!(detail.venue.facebook_link, input.facebook_link);
        assert_eq!(detail.venue.website_link, input.website_link);
        assert_eq!(detail.venue.genres, input.genres);
        assert!(detail.venue.seeking_talent);
        assert_eq!(detail.venue.seeking_description, input.seeking_description);
        assert!(detail.past_shows.is_empty());
        assert!(detail.upcoming_shows.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_seeking_description_cleared_when_not_seeking() -> Result<()> {
        let db = setup_test_db().await?;
        let mut input = sample_venue_input("Quiet Room");
        input.seeking_talent = false;
        input.seeking_description = Some("Ignored".to_string());

        let venue = create_venue(&db, input).await?;
        assert!(!venue.seeking_talent);
        assert_eq!(venue.seeking_description, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_venue_detail_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let result = get_venue_detail(&db, 42, now()).await;
        assert!(matches!(result, Err(Error::VenueNotFound { id: 42 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_detail_partitions_shows_around_now() -> Result<()> {
        let (db, venue, artist) = setup_with_venue_and_artist().await?;
        create_test_show(&db, artist.id, venue.id, now() - Duration::days(3)).await?;
        create_test_show(&db, artist.id, venue.id, now()).await?;
        create_test_show(&db, artist.id, venue.id, now() + Duration::days(3)).await?;
        create_test_show(&db, artist.id, venue.id, now() + Duration::days(10)).await?;

        let detail = get_venue_detail(&db, venue.id, now()).await?;
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 2);
        // Same artist, one entry per show
        assert!(
            detail
                .upcoming_shows
                .iter()
                .all(|s| s.artist_id == artist.id && s.artist_name == artist.name)
        );
        assert_eq!(detail.past_shows[0].start_time, "Wednesday May, 29, 2030 at 6:00PM");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_venue_areas_groups_by_city_and_state() -> Result<()> {
        let db = setup_test_db().await?;
        let artist = create_test_artist(&db, "Guns N Petals").await?;
        let hop = create_custom_venue(&db, "The Musical Hop", "San Francisco", "CA").await?;
        let dueling = create_custom_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await?;
        let park = create_custom_venue(&db, "Park Square Live Music & Coffee", "San Francisco", "CA")
            .await?;
        create_test_show(&db, artist.id, park.id, now() + Duration::days(1)).await?;
        create_test_show(&db, artist.id, park.id, now() - Duration::days(1)).await?;

        let areas = list_venue_areas(&db, now()).await?;
        assert_eq!(areas.len(), 2);

        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[0].state, "CA");
        let names: Vec<_> = areas[0].venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 1);
        assert_eq!(areas[0].venues[1].id, hop.id);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 0);

        assert_eq!(areas[1].city, "New York");
        assert_eq!(areas[1].venues[0].id, dueling.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_venues_is_case_insensitive_substring() -> Result<()> {
        let db = setup_test_db().await?;
        create_custom_venue(&db, "The Musical Hop", "San Francisco", "CA").await?;
        create_custom_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await?;
        create_custom_venue(&db, "Park Square Live Music & Coffee", "San Francisco", "CA").await?;

        let hop = search_venues(&db, "hop", now()).await?;
        assert_eq!(hop.count, 1);
        assert_eq!(hop.data[0].name, "The Musical Hop");

        let music = search_venues(&db, "Music", now()).await?;
        assert_eq!(music.count, 2);
        let names: Vec<_> = music.data.iter().map(|v| v.name.as_str()).collect();
        assert!(names.contains(&"The Musical Hop"));
        assert!(names.contains(&"Park Square Live Music & Coffee"));

        let none = search_venues(&db, "jazz cellar", now()).await?;
        assert_eq!(none.count, 0);

        let all = search_venues(&db, "", now()).await?;
        assert_eq!(all.count, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_venues_with_accents_and_wildcards() -> Result<()> {
        let db = setup_test_db().await?;
        create_custom_venue(&db, "The Musical Hop", "San Francisco", "CA").await?;
        create_custom_venue(&db, "CAFÉ Olé", "Austin", "TX").await?;
        create_custom_venue(&db, "100% Jazz_Club", "Austin", "TX").await?;

        let cafe = search_venues(&db, "CAFÉ", now()).await?;
        assert_eq!(cafe.count, 1);
        assert_eq!(cafe.data[0].name, "CAFÉ Olé");
        assert_eq!(search_venues(&db, "olé", now()).await?.count, 1);

        let percent = search_venues(&db, "%", now()).await?;
        assert_eq!(percent.count, 1);
        assert_eq!(percent.data[0].name, "100% Jazz_Club");

        let underscore = search_venues(&db, "_", now()).await?;
        assert_eq!(underscore.count, 1);
        assert_eq!(underscore.data[0].name, "100% Jazz_Club");

        assert_eq!(search_venues(&db, "100%", now()).await?.count, 1);
        assert_eq!(search_venues(&db, "z_c", now()).await?.count, 1);
        assert_eq!(search_venues(&db, "zzc", now()).await?.count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_venue_overwrites_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let original = create_venue(&db, sample_venue_input("The Musical Hop")).await?;

        let mut edited = sample_venue_input("The Musical Hop");
        edited.phone = Some("415-000-1234".to_string());
        edited.genres = Genres(vec!["Swing".to_string(), "Folk".to_string()]);
        edited.seeking_talent = false;
        edited.seeking_description = None;

        let updated = update_venue(&db, original.id, edited).await?;
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.phone.as_deref(), Some("415-000-1234"));
        assert_eq!(updated.genres.0, vec!["Swing", "Folk"]);
        assert!(!updated.seeking_talent);
        // Untouched fields keep their values
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.address, original.address);
        assert_eq!(updated.website_link, original.website_link);

        let stored = require_venue(&db, original.id).await?;
        assert_eq!(stored, updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_venue_fails() -> Result<()> {
        let db = setup_test_db().await?;
        let result = update_venue(&db, 7, sample_venue_input("Ghost")).await;
        assert!(matches!(result, Err(Error::VenueNotFound { id: 7 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_venue_without_shows() -> Result<()> {
        let db = setup_test_db().await?;
        let venue = create_venue(&db, sample_venue_input("Short Lived")).await?;

        let deleted = delete_venue(&db, venue.id).await?;
        assert_eq!(deleted.id, venue.id);
        assert!(get_venue_by_id(&db, venue.id).await?.is_none());
        assert!(list_venue_areas(&db, now()).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_venue_with_shows_is_rejected() -> Result<()> {
        let (db, venue, artist) = setup_with_venue_and_artist().await?;
        create_test_show(&db, artist.id, venue.id, now() + Duration::days(1)).await?;

        let result = delete_venue(&db, venue.id).await;
        assert!(matches!(
            result,
            Err(Error::VenueHasShows { id, count: 1 }) if id == venue.id
        ));
        assert!(get_venue_by_id(&db, venue.id).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_venue_by_id_mock() -> Result<()> {
        let venue = venue::Model {
            id: 1,
            name: "Mocked".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            address: "1 Main St".to_string(),
            phone: None,
            image_link: None,
            facebook_link: None,
            website_link: None,
            genres: Genres(vec!["Blues".to_string()]),
            seeking_talent: false,
            seeking_description: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![venue.clone()]])
            .into_connection();

        assert_eq!(get_venue_by_id(&db, 1).await?, Some(venue));
        Ok(())
    }
}
