//! Rendering of items, summaries, and notices as terminal text.
//!
//! All functions here are pure string producers; nothing in this module
//! reads or mutates the store.

use crate::cli::notify::{Notice, Severity};
use crate::core::item::Item;
use crate::core::report::InventorySummary;

/// Renders a list projection, one line per item, or the empty-state hint.
#[must_use]
pub fn item_list(items: &[&Item]) -> String {
    if items.is_empty() {
        return empty_state();
    }

    items
        .iter()
        .map(|item| item_line(item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one item as a single list line: id, two-letter avatar, name,
/// code, stock with unit and status label, and the price when one is set.
#[must_use]
pub fn item_line(item: &Item) -> String {
    let mut line = format!(
        "{:>14}  [{:<2}] {} ({})  {} {}  {}",
        item.id,
        avatar(&item.name),
        item.name,
        item.code,
        item.stock,
        item.unit,
        item.status().label(),
    );
    if item.price > 0.0 {
        line.push_str(&format!("  Rp {}", format_amount(item.price)));
    }
    line
}

/// Hint shown when the projection is empty.
#[must_use]
pub fn empty_state() -> String {
    "No items to show.\nStart by adding your first item: add --name <name> --stock <count>"
        .to_string()
}

/// Renders the summary command output.
#[must_use]
pub fn summary_block(summary: &InventorySummary) -> String {
    format!(
        "Items: {} total ({} available, {} low, {} out of stock)\n\
         Units on hand: {}\n\
         Inventory value at cost: Rp {}",
        summary.total_items,
        summary.available,
        summary.low,
        summary.empty,
        summary.total_units,
        format_amount(summary.inventory_value),
    )
}

/// Renders a transient notice with its severity marker.
#[must_use]
pub fn notice_line(notice: &Notice) -> String {
    let marker = match notice.severity {
        Severity::Success => "✅",
        Severity::Info => "ℹ",
    };
    format!("{marker} {}", notice.message)
}

/// Groups a non-negative amount into thousands with dot separators, the way
/// the item prices are quoted (e.g., `25000` renders as `25.000`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    let whole = value.round().abs() as i64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Two-letter uppercase avatar derived from the item name.
fn avatar(name: &str) -> String {
    name.trim()
        .chars()
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
