//! Shared test utilities for `StockBuddy`.
//!
//! This module provides common helper functions for setting up test
//! databases and stores with sensible defaults.

use crate::config::{database, seed};
use crate::core::item::ItemDraft;
use crate::core::store::InventoryStore;
use crate::errors::Result;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a store over a fresh in-memory database, holding the built-in
/// sample items (no snapshot exists yet, so loading falls back to them).
pub async fn setup_seeded_store() -> Result<InventoryStore> {
    let db = setup_test_db().await?;
    InventoryStore::load(db, seed::default_seed_items()).await
}

/// Creates an item draft with sensible defaults.
///
/// # Arguments
/// * `name` - Item name
/// * `stock` - Units on hand
///
/// # Defaults
/// * `unit`: "pcs"
/// * everything else: [`ItemDraft::default`]
#[must_use]
pub fn test_draft(name: &str, stock: i64) -> ItemDraft {
    ItemDraft {
        name: name.to_string(),
        stock,
        unit: "pcs".to_string(),
        ..ItemDraft::default()
    }
}
