//! Command handlers - each user action maps to exactly one store or query
//! operation followed by one render call.
//!
//! Handlers never talk to the terminal directly: they take parsed input,
//! mutate the store (or derive a projection), post a notice where the
//! original flow showed a toast, and return the rendered reply. The session
//! loop in the parent module does all reading and printing, which keeps
//! everything here testable without a terminal.

use crate::cli::notify::{Notice, Notifier};
use crate::cli::render;
use crate::cli::ViewState;
use crate::core::item::{Item, ItemDraft};
use crate::core::query::filter_items;
use crate::core::report::summarize;
use crate::core::store::InventoryStore;
use crate::errors::{Error, Result};

/// Optional replacements for an existing item's mutable fields.
///
/// The edit flow starts from the stored record and overwrites every field
/// the user supplied, then submits the full field set - the same shape as a
/// form pre-populated with the current values.
#[derive(Debug, Default, Clone)]
pub struct DraftOverrides {
    /// Replacement name
    pub name: Option<String>,
    /// Replacement code
    pub code: Option<String>,
    /// Replacement category
    pub category: Option<String>,
    /// Replacement stock count
    pub stock: Option<i64>,
    /// Replacement unit
    pub unit: Option<String>,
    /// Replacement cost
    pub cost: Option<f64>,
    /// Replacement price
    pub price: Option<f64>,
    /// Replacement description
    pub description: Option<String>,
    /// Replacement low-stock threshold
    pub min_stock: Option<i64>,
}

impl DraftOverrides {
    /// Builds the full draft for an update: the existing record's fields
    /// with every supplied override applied.
    #[must_use]
    pub fn apply(self, existing: &Item) -> ItemDraft {
        let base = ItemDraft::from(existing);
        ItemDraft {
            name: self.name.unwrap_or(base.name),
            code: self.code.unwrap_or(base.code),
            category: self.category.unwrap_or(base.category),
            stock: self.stock.unwrap_or(base.stock),
            unit: self.unit.unwrap_or(base.unit),
            cost: self.cost.unwrap_or(base.cost),
            price: self.price.unwrap_or(base.price),
            description: self.description.unwrap_or(base.description),
            min_stock: self.min_stock.unwrap_or(base.min_stock),
        }
    }
}

/// Shows the list view, updating the view state first when the user changed
/// the search text or the stock filter.
///
/// The projection is always re-derived from the full collection; nothing is
/// cached between calls.
#[must_use]
pub fn show_list(store: &InventoryStore, view: &ViewState) -> String {
    let visible = filter_items(store.items(), &view.search, view.filter);
    render::item_list(&visible)
}

/// Adds a new item and returns the confirmation or blocking message.
///
/// Validation failures abort the operation with a blocking message and no
/// state change; they are not session errors.
pub async fn add_item(
    store: &mut InventoryStore,
    notifier: &Notifier,
    draft: ItemDraft,
) -> Result<String> {
    match store.add(draft).await {
        Ok(item) => {
            notifier.post(Notice::success("Item added successfully!"));
            Ok(format!(
                "✅ Added '{}' (id {}, code {}).",
                item.name, item.id, item.code
            ))
        }
        Err(Error::Validation { message }) => Ok(format!("❌ {message}")),
        Err(Error::InvalidAmount { amount }) => Ok(format!("❌ Invalid amount: {amount}")),
        Err(e) => Err(e),
    }
}

/// Replaces the fields of an existing item and returns the confirmation or
/// blocking message. An unknown id is reported without touching anything.
pub async fn edit_item(
    store: &mut InventoryStore,
    notifier: &Notifier,
    id: i64,
    overrides: DraftOverrides,
) -> Result<String> {
    let Some(existing) = store.get(id) else {
        return Ok(format!("❌ No item with id {id}."));
    };
    let draft = overrides.apply(existing);

    match store.update(id, draft).await {
        Ok(Some(item)) => {
            notifier.post(Notice::success("Item updated successfully!"));
            Ok(format!("✅ Updated '{}' (id {}).", item.name, item.id))
        }
        Ok(None) => Ok(format!("❌ No item with id {id}.")),
        Err(Error::Validation { message }) => Ok(format!("❌ {message}")),
        Err(Error::InvalidAmount { amount }) => Ok(format!("❌ Invalid amount: {amount}")),
        Err(e) => Err(e),
    }
}

/// Deletes an item by id. Deleting an id that does not exist is a quiet
/// no-op, reported as such.
pub async fn delete_item(
    store: &mut InventoryStore,
    notifier: &Notifier,
    id: i64,
) -> Result<String> {
    if store.remove(id).await? {
        notifier.post(Notice::success("Item deleted successfully!"));
        Ok(format!("✅ Deleted item {id}."))
    } else {
        Ok(format!("No item with id {id}; nothing deleted."))
    }
}

/// Renders the aggregate summary of the whole collection.
#[must_use]
pub fn show_summary(store: &InventoryStore) -> String {
    render::summary_block(&summarize(store.items()))
}
