use super::{checkbox, checkbox_value, genres, link, optional, required, state_code};
use crate::{core::artist::ArtistInput, entities::artist, errors::Result};
use serde::Deserialize;

/// Fields of the artist create and edit pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArtistForm {
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Contact phone number
    pub phone: String,
    /// Image URL
    pub image_link: String,
    /// Facebook page URL
    pub facebook_link: String,
    /// Website URL
    pub website_link: String,
    /// One entry per repeated `genres` field
    pub genres: Vec<String>,
    /// `"y"` when the checkbox is ticked
    #[serde(default)]
    pub seeking_venue: Option<String>,
    /// What the venue or artist is looking for
    pub seeking_description: String,
}

impl ArtistForm {
    /// Checks every field and produces the input for a create or update.
    pub fn validate(self) -> Result<ArtistInput> {
        Ok(ArtistInput {
            name: required("name", &self.name)?,
            city: required("city", &self.city)?,
            state: state_code(&self.state)?,
            phone: optional(&self.phone),
            image_link: link("image_link", &self.image_link)?,
            facebook_link: link("facebook_link", &self.facebook_link)?,
            website_link: link("website_link", &self.website_link)?,
            genres: genres(self.genres)?,
            seeking_venue: checkbox(self.seeking_venue.as_deref()),
            seeking_description: optional(&self.seeking_description),
        })
    }

    /// Whether the seeking checkbox is ticked.
    #[must_use]
    pub fn is_seeking(&self) -> bool {
        checkbox(self.seeking_venue.as_deref())
    }
}

impl From<&artist::Model> for ArtistForm {
    fn from(artist: &artist::Model) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            genres: artist.genres.0.clone(),
            seeking_venue: checkbox_value(artist.seeking_venue),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}
