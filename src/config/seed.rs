//! Seed item definitions loaded from config.toml.
//!
//! When no persisted collection exists (first run, or an unreadable
//! snapshot), the store starts from a small set of sample items. The samples
//! can be overridden with `[[items]]` tables in a TOML file; without one, the
//! built-in defaults below are used.

use crate::core::item::Item;
use crate::errors::{Error, Result};
use chrono::Utc;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire seed file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// List of item definitions to seed
    pub items: Vec<SeedItem>,
}

/// Configuration for a single seed item
#[derive(Debug, Deserialize, Clone)]
pub struct SeedItem {
    /// Item name
    pub name: String,
    /// Item code
    pub code: String,
    /// Free-form category tag
    pub category: String,
    /// Units on hand
    pub stock: i64,
    /// Unit of measure
    pub unit: String,
    /// Purchase cost per unit
    pub cost: f64,
    /// Selling price per unit
    pub price: f64,
    /// Optional description
    #[serde(default)]
    pub description: String,
    /// Low-stock threshold
    #[serde(default = "default_min_stock")]
    pub min_stock: i64,
}

const fn default_min_stock() -> i64 {
    5
}

/// Loads seed configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed config: {e}"),
    })
}

/// The built-in sample items used when no seed file is present.
#[must_use]
pub fn default_seed() -> Vec<SeedItem> {
    vec![
        SeedItem {
            name: "Kopi Arabika".to_string(),
            code: "KO001".to_string(),
            category: "minuman".to_string(),
            stock: 25,
            unit: "pcs".to_string(),
            cost: 15000.0,
            price: 25000.0,
            description: "Kopi arabika premium".to_string(),
            min_stock: 10,
        },
        SeedItem {
            name: "Teh Tarik".to_string(),
            code: "TE002".to_string(),
            category: "minuman".to_string(),
            stock: 5,
            unit: "pcs".to_string(),
            cost: 5000.0,
            price: 12000.0,
            description: "Teh tarik manis".to_string(),
            min_stock: 8,
        },
        SeedItem {
            name: "Nasi Ayam".to_string(),
            code: "NA003".to_string(),
            category: "makanan".to_string(),
            stock: 0,
            unit: "pcs".to_string(),
            cost: 8000.0,
            price: 15000.0,
            description: "Nasi dengan ayam".to_string(),
            min_stock: 15,
        },
    ]
}

/// Turns seed definitions into full items.
///
/// Seed ids are ordinals starting at 1, and every seeded item is stamped
/// with the current time as its creation time.
#[must_use]
pub fn materialize(seeds: Vec<SeedItem>) -> Vec<Item> {
    let now = Utc::now();
    seeds
        .into_iter()
        .enumerate()
        .map(|(index, seed)| Item {
            id: index as i64 + 1,
            name: seed.name,
            code: seed.code,
            category: seed.category,
            stock: seed.stock,
            unit: seed.unit,
            cost: seed.cost,
            price: seed.price,
            description: seed.description,
            min_stock: seed.min_stock,
            created_at: now,
        })
        .collect()
}

/// The built-in sample items, materialized.
#[must_use]
pub fn default_seed_items() -> Vec<Item> {
    materialize(default_seed())
}

/// Resolves the seed items for a session: the seed file if one exists at
/// `path`, the built-in samples otherwise.
///
/// # Errors
/// Returns an error only when a seed file exists but cannot be parsed; a
/// missing file is not an error.
pub fn resolve_seed_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    if path.as_ref().exists() {
        let config = load_config(path)?;
        Ok(materialize(config.items))
    } else {
        Ok(default_seed_items())
    }
}
