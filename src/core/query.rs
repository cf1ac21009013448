//! Query/filter engine for the item list view.
//!
//! The visible projection is always re-derived from the full collection:
//! there is no incremental maintenance and nothing is cached across
//! mutations. Filtering is stable - results keep the insertion order of the
//! underlying collection.

use crate::core::item::{Item, StockStatus};
use crate::errors::Error;
use std::str::FromStr;

/// Stock predicate selectable in the list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StockFilter {
    /// No stock filtering
    #[default]
    All,
    /// Items with any stock on hand (includes low-stock items)
    Available,
    /// Items on hand but at or below their minimum threshold
    Low,
}

impl StockFilter {
    /// Whether the given item passes this filter.
    ///
    /// Both predicates are expressed through [`Item::status`] so the filter
    /// can never disagree with the status shown next to each item.
    #[must_use]
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Available => item.status() != StockStatus::Empty,
            Self::Low => item.status() == StockStatus::Low,
        }
    }
}

impl FromStr for StockFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "available" => Ok(Self::Available),
            "low" => Ok(Self::Low),
            other => Err(Error::Validation {
                message: format!("unknown filter '{other}' (expected all, available or low)"),
            }),
        }
    }
}

/// Derives the visible projection of the collection for the list view.
///
/// The free-text query is matched case-insensitively as a substring of the
/// item name OR code; the stock filter is applied conjunctively. An empty or
/// whitespace-only query matches everything. The returned references keep
/// the collection's insertion order.
#[must_use]
pub fn filter_items<'a>(items: &'a [Item], search: &str, filter: StockFilter) -> Vec<&'a Item> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_search = needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.code.to_lowercase().contains(&needle);
            matches_search && filter.matches(item)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::seed::default_seed_items;

    #[test]
    fn test_empty_query_and_all_filter_returns_everything_in_order() {
        let items = default_seed_items();
        let visible = filter_items(&items, "", StockFilter::All);

        assert_eq!(visible.len(), items.len());
        for (original, projected) in items.iter().zip(&visible) {
            assert_eq!(original.id, projected.id);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = default_seed_items();
        let once: Vec<Item> = filter_items(&items, "ko", StockFilter::Available)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Item> = filter_items(&once, "ko", StockFilter::Available)
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_matches_name_or_code_case_insensitively() {
        let items = default_seed_items();

        let by_name = filter_items(&items, "KOPI", StockFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Kopi Arabika");

        let by_code = filter_items(&items, "te002", StockFilter::All);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].name, "Teh Tarik");
    }

    #[test]
    fn test_low_filter_on_seed_items_yields_only_teh_tarik() {
        let items = default_seed_items();
        let low = filter_items(&items, "", StockFilter::Low);

        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Teh Tarik");
    }

    #[test]
    fn test_available_filter_includes_low_stock_items() {
        let items = default_seed_items();
        let available = filter_items(&items, "", StockFilter::Available);

        // Kopi Arabika (25 on hand) and Teh Tarik (5 on hand, low) both pass;
        // Nasi Ayam (0 on hand) does not.
        assert_eq!(available.len(), 2);
        assert!(available.iter().all(|item| item.stock > 0));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let items = default_seed_items();

        // "a" appears in all three names, but only Teh Tarik is low.
        let visible = filter_items(&items, "a", StockFilter::Low);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Teh Tarik");

        // Query and filter that individually match but never together.
        let visible = filter_items(&items, "nasi", StockFilter::Available);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_parses_from_str() {
        assert_eq!("all".parse::<StockFilter>().unwrap(), StockFilter::All);
        assert_eq!(
            "Available".parse::<StockFilter>().unwrap(),
            StockFilter::Available
        );
        assert_eq!("LOW".parse::<StockFilter>().unwrap(), StockFilter::Low);
        assert!("sold-out".parse::<StockFilter>().is_err());
    }
}
