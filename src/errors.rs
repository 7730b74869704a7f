//! Unified error types for Fyyur.
//!
//! Every fallible operation in the crate returns [`Result`]. The web layer
//! decides how an error is presented by looking at its [`ErrorKind`].

use thiserror::Error;

/// Closed classification of everything that can go wrong in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested record does not exist
    NotFound,
    /// Submitted input is missing or malformed
    Validation,
    /// The operation would break referential integrity
    Conflict,
    /// The database rejected the query or could not be reached
    Storage,
    /// Start-up configuration is invalid
    Config,
}

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Venue not found: {id}")]
    VenueNotFound { id: i64 },

    #[error("Artist not found: {id}")]
    ArtistNotFound { id: i64 },

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Venue {id} still has {count} show(s) listed")]
    VenueHasShows { id: i64, count: u64 },
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the kind this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VenueNotFound { .. } | Self::ArtistNotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::VenueHasShows { .. } => ErrorKind::Conflict,
            Self::Database(_) | Self::Io(_) => ErrorKind::Storage,
            Self::Config { .. } | Self::EnvVar(_) => ErrorKind::Config,
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
