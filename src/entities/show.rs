//! Show entity - An artist playing a venue at a point in time.
//!
//! Shows join artists and venues. Whether a show is upcoming or past is never
//! stored; it is derived by comparing `start_time` with the current time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Show database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    /// Unique identifier for the show
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the performing artist
    pub artist_id: i64,
    /// ID of the hosting venue
    pub venue_id: i64,
    /// When the show starts
    pub start_time: DateTimeUtc,
}

/// Defines relationships between Show and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each show belongs to one artist
    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id"
    )]
    Artist,
    /// Each show belongs to one venue
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id"
    )]
    Venue,
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
