use crate::{
    core::{format::parse_start_time, show::ShowInput},
    errors::{Error, Result},
};
use serde::Deserialize;

/// Fields of the show create page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShowForm {
    /// Artist ID as typed
    pub artist_id: String,
    /// Venue ID as typed
    pub venue_id: String,
    /// Start time as typed, parsed by [`crate::core::format::parse_start_time`]
    pub start_time: String,
}

impl ShowForm {
    /// Parses both IDs and the start time.
    pub fn validate(self) -> Result<ShowInput> {
        Ok(ShowInput {
            artist_id: parse_id("artist_id", &self.artist_id)?,
            venue_id: parse_id("venue_id", &self.venue_id)?,
            start_time: parse_start_time(&self.start_time).ok_or_else(|| {
                Error::validation(
                    "start_time",
                    format!("`{}` is not a date and time", self.start_time.trim()),
                )
            })?,
        })
    }
}

fn parse_id(field: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::validation(field, format!("`{}` is not an ID", value.trim())))
}
