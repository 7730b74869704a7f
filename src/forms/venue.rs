use super::{checkbox, checkbox_value, genres, link, optional, required, state_code};
use crate::{core::venue::VenueInput, entities::venue, errors::Result};
use serde::Deserialize;

/// Fields of the venue create and edit pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VenueForm {
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Street address
    pub address: String,
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
    pub seeking_talent: Option<String>,
    /// What the venue or artist is looking for
    pub seeking_description: String,
}

impl VenueForm {
    /// Checks every field and produces the input for a create or update.
    pub fn validate(self) -> Result<VenueInput> {
        Ok(VenueInput {
            name: required("name", &self.name)?,
            city: required("city", &self.city)?,
            state: state_code(&self.state)?,
            address: required("address", &self.address)?,
            phone: optional(&self.phone),
            image_link: link("image_link", &self.image_link)?,
            facebook_link: link("facebook_link", &self.facebook_link)?,
            website_link: link("website_link", &self.website_link)?,
            genres: genres(self.genres)?,
            seeking_talent: checkbox(self.seeking_talent.as_deref()),
            seeking_description: optional(&self.seeking_description),
        })
    }

    /// Whether the seeking checkbox is ticked.
    #[must_use]
    pub fn is_seeking(&self) -> bool {
        checkbox(self.seeking_talent.as_deref())
    }
}

impl From<&venue::Model> for VenueForm {
    fn from(venue: &venue::Model) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            genres: venue.genres.0.clone(),
            seeking_talent: checkbox_value(venue.seeking_talent),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}
