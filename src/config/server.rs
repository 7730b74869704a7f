//! Server settings read from the environment.
//!
//! Both values fall back to a default when the variable is unset, so a bare
//! `cargo run` serves on localhost with the bundled seed file.

use super::seed::DEFAULT_SEED_FILE;
use crate::errors::{Error, Result};
use std::net::SocketAddr;

/// Fallback used when `FYYUR_BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Path of the seed file
    pub seed_file: String,
}

impl ServerConfig {
    /// Reads `FYYUR_BIND_ADDR` and `FYYUR_SEED_FILE`.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("FYYUR_BIND_ADDR").ok().as_deref(),
            std::env::var("FYYUR_SEED_FILE").ok(),
        )
    }

    fn from_values(bind_addr: Option<&str>, seed_file: Option<String>) -> Result<Self> {
        let raw = bind_addr.unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw.parse().map_err(|e| Error::Config {
            message: format!("FYYUR_BIND_ADDR `{raw}` is not a socket address: {e}"),
        })?;
        Ok(Self {
            bind_addr,
            seed_file: seed_file.unwrap_or_else(|| DEFAULT_SEED_FILE.to_string()),
        })
    }
}
