//! Seed data loading from seed.toml
//!
//! The seed file describes an initial set of venues, artists and shows. It is only
//! applied to an empty database; see [`crate::core::seed`].

use crate::errors::{Error, Result};
use crate::forms::{ArtistForm, VenueForm};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// Default location of the seed file.
pub const DEFAULT_SEED_FILE: &str = "seed.toml";

/// Structure of the whole seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Venues in insertion order
    #[serde(default)]
    pub venues: Vec<VenueSeed>,
    /// Artists in insertion order
    #[serde(default)]
    pub artists: Vec<ArtistSeed>,
    /// Shows referring to the lists above
    #[serde(default)]
    pub shows: Vec<ShowSeed>,
}

/// A venue entry; optional fields may be left out.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueSeed {
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Street address
    pub address: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: String,
    /// Image URL
    #[serde(default)]
    pub image_link: String,
    /// Facebook page URL
    #[serde(default)]
    pub facebook_link: String,
    /// Website URL
    #[serde(default)]
    pub website_link: String,
    /// Genres in submission order
    pub genres: Vec<String>,
    /// Whether the venue is looking for artists
    #[serde(default)]
    pub seeking_talent: bool,
    /// What the venue or artist is looking for
    #[serde(default)]
    pub seeking_description: String,
}

/// An artist entry; optional fields may be left out.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSeed {
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: String,
    /// Image URL
    #[serde(default)]
    pub image_link: String,
    /// Facebook page URL
    #[serde(default)]
    pub facebook_link: String,
    /// Website URL
    #[serde(default)]
    pub website_link: String,
    /// Genres in submission order
    pub genres: Vec<String>,
    /// Whether the artist is looking for venues
    #[serde(default)]
    pub seeking_venue: bool,
    /// What the venue or artist is looking for
    #[serde(default)]
    pub seeking_description: String,
}

/// A show entry. `venue` and `artist` are 1-based positions in the file's
/// venue and artist lists.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowSeed {
    /// 1-based position in `venues`
    pub venue: usize,
    /// 1-based position in `artists`
    pub artist: usize,
    /// When the show starts
    pub start_time: DateTime<Utc>,
}

impl From<VenueSeed> for VenueForm {
    fn from(seed: VenueSeed) -> Self {
        Self {
            name: seed.name,
            city: seed.city,
            state: seed.state,
            address: seed.address,
            phone: seed.phone,
            image_link: seed.image_link,
            facebook_link: seed.facebook_link,
            website_link: seed.website_link,
            genres: seed.genres,
            seeking_talent: seed.seeking_talent.then(|| "y".to_string()),
            seeking_description: seed.seeking_description,
        }
    }
}

impl From<ArtistSeed> for ArtistForm {
    fn from(seed: ArtistSeed) -> Self {
        Self {
            name: seed.name,
            city: seed.city,
            state: seed.state,
            phone: seed.phone,
            image_link: seed.image_link,
            facebook_link: seed.facebook_link,
            website_link: seed.website_link,
            genres: seed.genres,
            seeking_venue: seed.seeking_venue.then(|| "y".to_string()),
            seeking_description: seed.seeking_description,
        }
    }
}

/// Parses seed data from TOML text.
pub fn parse_seed(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })
}

/// Loads the seed file at `path`, returning `None` when it does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Option<SeedConfig>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("No seed file at {:?}, skipping seed", path);
        return Ok(None);
    }
    tracing::debug!("Loading seed data from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path.display()),
    })?;
    parse_seed(&contents).map(Some)
}
