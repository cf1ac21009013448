//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! The schema is generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database always matches the Rust
//! struct definitions without manual SQL.

use crate::entities::Snapshot;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::debug;

/// Establishes a connection to the database at the given URL.
///
/// The URL typically points at a local `SQLite` file (`sqlite://...?mode=rwc`)
/// or at `sqlite::memory:` in tests.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at: {database_url}");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Table creation is idempotent: existing tables are left untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut snapshot_table = schema.create_table_from_entity(Snapshot);
    snapshot_table.if_not_exists();

    db.execute(builder.build(&snapshot_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SnapshotModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that the table exists by querying it
        let _: Vec<SnapshotModel> = Snapshot::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<SnapshotModel> = Snapshot::find().limit(1).all(&db).await?;

        Ok(())
    }
}
