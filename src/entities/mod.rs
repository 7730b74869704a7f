//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod artist;
pub mod genres;
pub mod show;
pub mod venue;

pub use artist::{Entity as Artist, Model as ArtistModel};
pub use genres::Genres;
pub use show::{Entity as Show, Model as ShowModel};
pub use venue::{Entity as Venue, Model as VenueModel};
