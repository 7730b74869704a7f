//! Genre list stored as a JSON array column.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered list of genre names attached to a venue or artist.
///
/// Order is kept exactly as submitted; no sorting or deduplication happens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<String>);

impl Genres {
    /// Returns the genre names as string slices.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
