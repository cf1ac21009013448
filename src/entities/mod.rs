//! Entity module - Contains all SeaORM entity definitions for the database.
//! The persistence model is a key-value table: each row holds one whole
//! serialized collection, mirroring the in-memory store on every mutation.

pub mod snapshot;

// Re-export specific types to avoid conflicts
pub use snapshot::{Column as SnapshotColumn, Entity as Snapshot, Model as SnapshotModel};
