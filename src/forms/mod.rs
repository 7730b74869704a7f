//! Form payloads submitted by the listing pages.
//!
//! Each form is deserialized from the urlencoded request body in one go, then
//! `validate` turns it into the input type the core layer accepts. A form that is
//! missing a field never reaches `validate`: the extractor rejects it first.

/// Artist create and edit form
pub mod artist;
/// Show create form
pub mod show;
/// Venue create and edit form
pub mod venue;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

use crate::{
    entities::Genres,
    errors::{Error, Result},
};
use serde::Deserialize;

/// Body of the venue and artist search boxes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    /// Text to look for in names
    #[serde(default)]
    pub search_term: String,
}

/// Two-letter codes accepted in the `state` field.
pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Genres offered by the form's multi-select.
pub const GENRE_CHOICES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Value a checked checkbox submits.
const CHECKED: &str = "y";

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::validation(field, "cannot be empty"));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn link(field: &str, value: &str) -> Result<Option<String>> {
    match optional(value) {
        Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => Err(
            Error::validation(field, format!("`{url}` is not an http(s) URL")),
        ),
        other => Ok(other),
    }
}

fn state_code(value: &str) -> Result<String> {
    let code = required("state", value)?.to_uppercase();
    if STATES.contains(&code.as_str()) {
        Ok(code)
    } else {
        Err(Error::validation("state", format!("unknown state code `{code}`")))
    }
}

fn genres(values: Vec<String>) -> Result<Genres> {
    let genres: Vec<String> = values
        .into_iter()
        .map(|genre| genre.trim().to_string())
        .filter(|genre| !genre.is_empty())
        .collect();
    if genres.is_empty() {
        return Err(Error::validation("genres", "pick at least one genre"));
    }
    Ok(Genres(genres))
}

fn checkbox(value: Option<&str>) -> bool {
    value == Some(CHECKED)
}

fn checkbox_value(checked: bool) -> Option<String> {
    checked.then(|| CHECKED.to_string())
}
