/// Database configuration and connection management
pub mod database;

/// Seed data loading from seed.toml
pub mod seed;

/// HTTP server settings from environment variables
pub mod server;
