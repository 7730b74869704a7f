//! Venue entity - A place that hosts shows.
//!
//! Venues are grouped by city and state in listings and may advertise
//! that they are looking for talent.

use super::genres::Genres;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Venue database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    /// Unique identifier for the venue
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "The Musical Hop")
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter US state code
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
    /// Genres played at the venue, never empty once created
    pub genres: Genres,
    /// Whether the venue is looking for artists to book
    pub seeking_talent: bool,
    /// Free text shown to artists, only kept while `seeking_talent` is set
    pub seeking_description: Option<String>,
}

/// Defines relationships between Venue and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One venue hosts many shows
    #[sea_orm(has_many = "super::show::Entity")]
    Shows,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
