//! Seeding an empty database from [`SeedConfig`].

use crate::{
    config::seed::SeedConfig,
    entities::{Venue, artist, show, venue},
    errors::{Error, Result},
    forms::{ArtistForm, VenueForm},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// What a seed run inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    /// Venues inserted
    pub venues: usize,
    /// Artists inserted
    pub artists: usize,
    /// Shows inserted
    pub shows: usize,
}

/// Inserts the seed data when the venues table is empty.
///
/// Returns `None` if the database already holds venues. Everything is inserted in
/// one transaction, so a bad entry leaves the database untouched.
///
/// # Errors
/// Returns a validation error for an entry the forms would reject, a config error
/// for a show pointing outside the venue or artist list, or a database error.
#[instrument(skip_all)]
pub async fn seed_initial_data(
    db: &DatabaseConnection,
    seed: &SeedConfig,
) -> Result<Option<SeedSummary>> {
    if Venue::find().count(db).await? > 0 {
        info!("Database already has venues, skipping seed");
        return Ok(None);
    }

    let txn = db.begin().await?;

    let mut venue_ids = Vec::with_capacity(seed.venues.len());
    for entry in &seed.venues {
        let mut model = venue::ActiveModel {
            ..Default::default()
        };
        VenueForm::from(entry.clone()).validate()?.apply(&mut model);
        venue_ids.push(model.insert(&txn).await?.id);
    }

    let mut artist_ids = Vec::with_capacity(seed.artists.len());
    for entry in &seed.artists {
        let mut model = artist::ActiveModel {
            ..Default::default()
        };
        ArtistForm::from(entry.clone()).validate()?.apply(&mut model);
        artist_ids.push(model.insert(&txn).await?.id);
    }

    for (index, entry) in seed.shows.iter().enumerate() {
        let lookup = |ids: &[i64], position: usize, what: &str| {
            position
                .checked_sub(1)
                .and_then(|i| ids.get(i).copied())
                .ok_or_else(|| Error::Config {
                    message: format!("show #{} references unknown {what} #{position}", index + 1),
                })
        };
        show::ActiveModel {
            venue_id: Set(lookup(&venue_ids, entry.venue, "venue")?),
            artist_id: Set(lookup(&artist_ids, entry.artist, "artist")?),
            start_time: Set(entry.start_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    let summary = SeedSummary {
        venues: venue_ids.len(),
        artists: artist_ids.len(),
        shows: seed.shows.len(),
    };
    info!(
        venues = summary.venues,
        artists = summary.artists,
        shows = summary.shows,
        "Seeded initial data"
    );
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::seed::parse_seed,
        core::{show::list_shows, venue::search_venues},
        test_utils::*,
    };
    use chrono::{TimeZone, Utc};

    const SEED: &str = r#"
        [[venues]]
        name = "The Musical Hop"
        city = "San Francisco"
        state = "CA"
        address = "1015 Folsom Street"
        genres = ["Jazz", "Reggae", "Swing", "Classical", "Folk"]

        [[venues]]
        name = "Park Square Live Music & Coffee"
        city = "San Francisco"
        state = "CA"
        address = "34 Whiskey Moore Ave"
        genres = ["Rock n Roll", "Jazz", "Classical", "Folk"]

        [[artists]]
        name = "Guns N Petals"
        city = "San Francisco"
        state = "CA"
        genres = ["Rock n Roll"]

        [[shows]]
        venue = 2
        artist = 1
        start_time = "2019-06-15T23:00:00Z"
    "#;

    #[tokio::test]
    async fn test_seed_initial_data() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = parse_seed(SEED)?;

        let summary = seed_initial_data(&db, &seed).await?.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                venues: 2,
                artists: 1,
                shows: 1
            }
        );

        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let music = search_venues(&db, "Music", now).await?;
        assert_eq!(music.count, 2);

        let shows = list_shows(&db).await?;
        assert_eq!(shows[0].venue_name, "Park Square Live Music & Coffee");
        assert_eq!(shows[0].artist_name, "Guns N Petals");

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_skipped_when_venues_exist() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_venue(&db, "Already Here").await?;

        let seed = parse_seed(SEED)?;
        assert!(seed_initial_data(&db, &seed).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_rolls_back_on_bad_show_reference() -> Result<()> {
        let db = setup_test_db().await?;
        let mut seed = parse_seed(SEED)?;
        seed.shows[0].artist = 5;

        let result = seed_initial_data(&db, &seed).await;
        assert!(matches!(result, Err(Error::Config { .. })));
        assert_eq!(Venue::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_bundled_seed_file() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = parse_seed(include_str!("../../seed.toml"))?;

        let summary = seed_initial_data(&db, &seed).await?.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                venues: 3,
                artists: 3,
                shows: 5
            }
        );

        // Upcoming seed shows sit far in the future
        let cutoff = Utc.with_ymd_and_hms(2090, 1, 1, 0, 0, 0).unwrap();
        let upcoming = seed.shows.iter().filter(|s| s.start_time > cutoff).count();
        assert_eq!(upcoming, 3);
        Ok(())
    }
}
