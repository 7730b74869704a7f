//! Database configuration module for Fyyur.
//!
//! This module handles the database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs, including the foreign keys that tie
//! shows to their artist and venue.

use crate::entities::{Artist, Show, Venue};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info};

/// Fallback used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://fyyur.sqlite?mode=rwc";

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {}", database_url);
    let db = Database::connect(database_url).await?;
    info!("Database connection established");
    Ok(db)
}

/// Creates the venues, artists and shows tables if they do not exist yet.
///
/// Shows are created last because they reference the other two tables.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, Venue).await?;
    create_table(db, Artist).await?;
    create_table(db, Show).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(builder.build(&statement)).await?;
    debug!("Ensured table `{}` exists", entity.table_name());
    Ok(())
}
