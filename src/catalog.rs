//! Catalog Utilities
//!
//! Category labels and client-side filtering for the public menu view.

use crate::models::MenuItem;

/// Sentinel chip that bypasses category filtering
pub const ALL_LABEL: &str = "All";

/// Categories offered when creating or editing an item
pub const ITEM_CATEGORIES: &[&str] = &["Appetizer", "Main", "Dessert", "Drink"];

/// Chips shown in the menu view filter bar
pub const FILTER_LABELS: &[&str] = &["All", "Appetizer", "Main", "Dessert", "Drink"];

/// Category a blank draft starts with
pub const DEFAULT_CATEGORY: &str = "Main";

/// Subset of `items` whose category matches `label` case-insensitively,
/// in their original order. The "All" sentinel returns everything.
pub fn filter_by_category(items: &[MenuItem], label: &str) -> Vec<MenuItem> {
    if label == ALL_LABEL {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category.eq_ignore_ascii_case(label))
        .cloned()
        .collect()
}

/// Prices always render with two fractional digits.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn make_item(id: &str, name: &str, category: &str) -> MenuItem {
        MenuItem {
            id: Some(id.to_string()),
            name: name.to_string(),
            description: String::new(),
            price: 9.5,
            category: category.to_string(),
            available: true,
        }
    }

    #[test]
    fn test_all_returns_full_list_in_order() {
        let items = vec![
            make_item("1", "Bruschetta", "Appetizer"),
            make_item("2", "Risotto", "Main"),
            make_item("3", "Tiramisu", "Dessert"),
        ];

        let filtered = filter_by_category(&items, ALL_LABEL);

        assert_eq!(filtered, items);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec![
            make_item("1", "Bruschetta", "appetizer"),
            make_item("2", "Risotto", "Main"),
            make_item("3", "Calamari", "APPETIZER"),
        ];

        let filtered = filter_by_category(&items, "Appetizer");

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Bruschetta");
        assert_eq!(filtered[1].name, "Calamari");
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        let items = vec![make_item("1", "Risotto", "Main")];

        let filtered = filter_by_category(&items, "Drink");

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_price_formats_with_two_digits() {
        assert_eq!(format_price(5.0), "5.00");
        assert_eq!(format_price(5.5), "5.50");
        assert_eq!(format_price(12.345), "12.35");
        assert_eq!(format_price(0.0), "0.00");
    }
}
