//! Configuration management.
//!
//! Application settings come from the environment (with a `.env` file loaded
//! by the binary before this module runs); seed items come from an optional
//! `config.toml` next to the binary, with built-in defaults when absent.

/// Database connection and table creation
pub mod database;

/// Seed item definitions from config.toml
pub mod seed;

use crate::errors::Result;
use std::path::PathBuf;

/// Top-level application configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection URL
    pub database_url: String,
    /// Location of the optional seed configuration file
    pub seed_config_path: PathBuf,
}

/// Resolves the application configuration from the environment.
///
/// `DATABASE_URL` selects the database (defaulting to a local `SQLite` file)
/// and `STOCK_BUDDY_CONFIG` the seed configuration file (defaulting to
/// `./config.toml`). Both are optional; missing variables fall back to the
/// defaults rather than failing.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/stock_buddy.sqlite?mode=rwc".to_string());
    let seed_config_path = std::env::var("STOCK_BUDDY_CONFIG")
        .map_or_else(|_| PathBuf::from("config.toml"), PathBuf::from);

    Ok(AppConfig {
        database_url,
        seed_config_path,
    })
}
