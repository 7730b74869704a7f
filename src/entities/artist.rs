//! Artist entity - A performer that plays shows at venues.

use super::genres::Genres;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Artist database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    /// Unique identifier for the artist
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Guns N Petals")
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter US state code
    pub state: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Image URL
    pub image_link: Option<String>,
    /// Facebook page URL
    pub facebook_link: Option<String>,
    /// Website URL
    pub website_link: Option<String>,
    /// Genres the artist plays, never empty once created
    pub genres: Genres,
    /// Whether the artist is looking for venues to play at
    pub seeking_venue: bool,
    /// Free text shown to venues, only kept while `seeking_venue` is set
    pub seeking_description: Option<String>,
}

/// Defines relationships between Artist and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One artist plays many shows
    #[sea_orm(has_many = "super::show::Entity")]
    Shows,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
