//! Snapshot entity - Stores serialized collections under fixed keys.
//!
//! The whole item collection is persisted as one JSON array in a single row
//! of this table, keyed by the collection name. Reading a missing or
//! unparsable row is treated as "no data", never as an error.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Snapshot database model - one serialized collection per key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "snapshots")]
pub struct Model {
    /// Collection key (e.g., `"inventory_items"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Serialized collection payload (a JSON array)
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this snapshot was last written
    pub updated_at: DateTime,
}

/// `Snapshot` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
