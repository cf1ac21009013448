//! Inventory store - sole owner of the item collection and its persistence.
//!
//! The store holds the collection in memory in insertion order and mirrors it
//! to the snapshot table after every mutation, writing the whole collection
//! as one JSON array under a fixed key (write-through, no batching). Loading
//! fails open: a missing, empty, or unparsable snapshot is replaced by the
//! seed set and never surfaced as an error.

use crate::core::item::{Item, ItemDraft, generate_code};
use crate::entities::{Snapshot, snapshot};
use crate::errors::{Error, Result};
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::{debug, info, warn};

/// Fixed snapshot key under which the whole collection is persisted.
pub const STORAGE_KEY: &str = "inventory_items";

/// In-memory item collection, mirrored to the database on every mutation.
///
/// The store is the sole owner of all item records; views hold only derived,
/// non-owning projections recomputed on demand.
pub struct InventoryStore {
    db: DatabaseConnection,
    items: Vec<Item>,
}

impl InventoryStore {
    /// Loads the persisted collection, falling back to `seed` when there is
    /// no usable snapshot.
    ///
    /// An absent row, an empty collection, and unparsable JSON are all
    /// treated the same way: the seed items are used. Seed items live only
    /// in memory until the first mutation persists them.
    ///
    /// # Errors
    /// Returns an error only if the snapshot row itself cannot be queried;
    /// snapshot contents never cause an error.
    pub async fn load(db: DatabaseConnection, seed: Vec<Item>) -> Result<Self> {
        let stored = Snapshot::find_by_id(STORAGE_KEY.to_string()).one(&db).await?;

        let items = match stored {
            Some(row) => match serde_json::from_str::<Vec<Item>>(&row.value) {
                Ok(items) if !items.is_empty() => {
                    debug!("Loaded {} items from persisted snapshot.", items.len());
                    items
                }
                Ok(_) => {
                    info!("Persisted snapshot is empty, starting from seed data.");
                    seed
                }
                Err(e) => {
                    warn!("Discarding unparsable snapshot, starting from seed data: {e}");
                    seed
                }
            },
            None => {
                info!("No persisted inventory found, starting from seed data.");
                seed
            }
        };

        Ok(Self { db, items })
    }

    /// The full collection, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up a single item by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a new item from the draft, persists, and returns the stored item.
    ///
    /// The new item's id is the current millisecond timestamp (bumped past
    /// any existing id so ids stay unique within the store), and a blank
    /// draft code is replaced by one derived from the name and that
    /// timestamp.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] when the trimmed name is empty or the
    /// stock is zero - a zero stock is rejected as "not filled in", exactly
    /// like the form it replaces - or when stock or threshold are negative;
    /// [`Error::InvalidAmount`] when cost or price are negative or not
    /// finite; or a database/serialization error from persisting.
    pub async fn add(&mut self, draft: ItemDraft) -> Result<Item> {
        let item = self.item_from_draft(draft)?;
        self.items.push(item.clone());
        self.persist().await?;
        info!("Added item '{}' (id {}).", item.name, item.id);
        Ok(item)
    }

    /// Replaces all mutable fields of the item matching `id`, persists, and
    /// returns the updated item. Returns `Ok(None)` without touching
    /// anything when no item matches.
    ///
    /// `id` and the creation time are immutable. A blank draft code keeps
    /// the existing code; a code is never re-generated once a value exists.
    ///
    /// # Errors
    /// Same validation as [`Self::add`], except that a zero stock is allowed
    /// here: an item running out of stock is a legitimate state.
    pub async fn update(&mut self, id: i64, draft: ItemDraft) -> Result<Option<Item>> {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            debug!("Update for unknown item id {id} ignored.");
            return Ok(None);
        };

        let existing = self.items[position].clone();
        let mut updated = Self::validate_draft(draft)?;
        if updated.code.trim().is_empty() {
            updated.code = existing.code.clone();
        }

        let item = Item {
            id: existing.id,
            name: updated.name,
            code: updated.code.trim().to_string(),
            category: updated.category,
            stock: updated.stock,
            unit: updated.unit,
            cost: updated.cost,
            price: updated.price,
            description: updated.description,
            min_stock: updated.min_stock,
            created_at: existing.created_at,
        };

        self.items[position] = item.clone();
        self.persist().await?;
        info!("Updated item '{}' (id {}).", item.name, item.id);
        Ok(Some(item))
    }

    /// Removes the item matching `id`, persisting the shrunk collection.
    ///
    /// Idempotent: removing an absent id is a no-op and returns `false`.
    pub async fn remove(&mut self, id: i64) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!("Remove for unknown item id {id} ignored.");
            return Ok(false);
        }

        self.persist().await?;
        info!("Removed item id {id}.");
        Ok(true)
    }

    /// Serializes the full collection and upserts it under [`STORAGE_KEY`].
    ///
    /// Called after every mutating operation; the collection is always
    /// written as one unit, never partially.
    pub async fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.items)?;
        let row = snapshot::ActiveModel {
            key: Set(STORAGE_KEY.to_string()),
            value: Set(payload),
            updated_at: Set(Utc::now().naive_utc()),
        };

        Snapshot::insert(row)
            .on_conflict(
                OnConflict::column(snapshot::Column::Key)
                    .update_columns([snapshot::Column::Value, snapshot::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        debug!("Persisted {} items under '{STORAGE_KEY}'.", self.items.len());
        Ok(())
    }

    /// Builds and validates a full item from a draft, assigning a fresh id
    /// and creation time. The add-time stock rule applies here: a stock of
    /// zero is rejected.
    fn item_from_draft(&self, draft: ItemDraft) -> Result<Item> {
        let draft = Self::validate_draft(draft)?;
        if draft.stock == 0 {
            return Err(Error::Validation {
                message: "Item name and stock must be filled in".to_string(),
            });
        }

        let now = Utc::now();
        let mut id = now.timestamp_millis();
        while self.items.iter().any(|item| item.id == id) {
            id += 1;
        }

        let code = if draft.code.trim().is_empty() {
            generate_code(&draft.name, id)
        } else {
            draft.code.trim().to_string()
        };

        Ok(Item {
            id,
            name: draft.name,
            code,
            category: draft.category,
            stock: draft.stock,
            unit: draft.unit,
            cost: draft.cost,
            price: draft.price,
            description: draft.description,
            min_stock: draft.min_stock,
            created_at: now,
        })
    }

    /// Shared field validation for add and update.
    fn validate_draft(mut draft: ItemDraft) -> Result<ItemDraft> {
        draft.name = draft.name.trim().to_string();
        if draft.name.is_empty() {
            return Err(Error::Validation {
                message: "Item name and stock must be filled in".to_string(),
            });
        }

        if draft.stock < 0 {
            return Err(Error::Validation {
                message: "Stock cannot be negative".to_string(),
            });
        }

        if draft.min_stock < 0 {
            return Err(Error::Validation {
                message: "Minimum stock cannot be negative".to_string(),
            });
        }

        if draft.cost < 0.0 || !draft.cost.is_finite() {
            return Err(Error::InvalidAmount { amount: draft.cost });
        }

        if draft.price < 0.0 || !draft.price.is_finite() {
            return Err(Error::InvalidAmount { amount: draft.price });
        }

        Ok(draft)
    }
}
