//! Item model - the single inventory record and its derived stock status.
//!
//! Items are plain serializable values owned by the store; the persisted form
//! is a JSON array using camelCase field names (`minStock`, `createdAt`).
//! Stock status is a pure function of one item and drives both display
//! styling and the list filter predicates, so the two can never disagree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single inventory record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier - the millisecond timestamp at creation
    pub id: i64,
    /// Human-readable item name (e.g., "Kopi Arabika")
    pub name: String,
    /// Short item code, auto-derived from the name when left blank
    pub code: String,
    /// Free-form category tag (e.g., "minuman", "makanan")
    pub category: String,
    /// Units currently on hand
    pub stock: i64,
    /// Unit of measure (e.g., "pcs", "kg")
    pub unit: String,
    /// Purchase cost per unit
    pub cost: f64,
    /// Selling price per unit
    pub price: f64,
    /// Optional free-form description
    #[serde(default)]
    pub description: String,
    /// Threshold at or below which the item counts as low stock
    pub min_stock: i64,
    /// When the item was created; immutable after that
    pub created_at: DateTime<Utc>,
}

/// The mutable field set of an item, used for both create and edit.
///
/// Everything except `id` and `created_at`, which the store assigns once.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDraft {
    /// Item name; required, must be non-empty after trimming
    pub name: String,
    /// Item code; left blank to have one derived from the name
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
    pub description: String,
    /// Low-stock threshold
    pub min_stock: i64,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            category: String::new(),
            stock: 0,
            unit: String::new(),
            cost: 0.0,
            price: 0.0,
            description: String::new(),
            min_stock: 5,
        }
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            code: item.code.clone(),
            category: item.category.clone(),
            stock: item.stock,
            unit: item.unit.clone(),
            cost: item.cost,
            price: item.price,
            description: item.description.clone(),
            min_stock: item.min_stock,
        }
    }
}

/// Stock level classification of a single item.
///
/// Total and mutually exclusive: every stock value maps to exactly one
/// variant for a given threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    /// No units on hand
    Empty,
    /// On hand, but at or below the item's minimum threshold
    Low,
    /// Comfortably in stock
    Available,
}

impl StockStatus {
    /// Display label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "out of stock",
            Self::Low => "low",
            Self::Available => "available",
        }
    }
}

impl Item {
    /// Classifies this item's stock level against its own threshold.
    #[must_use]
    pub const fn status(&self) -> StockStatus {
        if self.stock <= 0 {
            StockStatus::Empty
        } else if self.stock <= self.min_stock {
            StockStatus::Low
        } else {
            StockStatus::Available
        }
    }
}

/// Derives a default item code from a name and a millisecond timestamp.
///
/// The code is the first two characters of the name uppercased, followed by
/// the last four digits of the timestamp. Deterministic for a given input
/// pair; only used when the user leaves the code field blank, and never
/// re-generated once a code exists. Two items created in the same millisecond
/// with the same name prefix would collide; that risk is accepted.
#[must_use]
pub fn generate_code(name: &str, timestamp_ms: i64) -> String {
    let prefix: String = name
        .trim()
        .chars()
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    let digits = timestamp_ms.to_string();
    let suffix_start = digits.len().saturating_sub(4);
    format!("{prefix}{}", &digits[suffix_start..])
}
