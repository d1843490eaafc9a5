//! List Synchronization
//!
//! Merge operations that keep the admin-held item list in step with
//! completed store mutations, plus the per-entity sequence guard that
//! discards responses overtaken by a newer mutation on the same row.

use std::collections::HashMap;

use crate::models::MenuItem;

/// How a finished mutation resolved, reported through one contract for
/// every mutation path (toggle, update, create).
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// Response merged into the held list
    Applied,
    /// Response discarded: a newer mutation was issued for the same row
    Stale,
    /// Store rejected the request; list left unchanged
    Failed(String),
}

/// Per-entity monotonic tickets for in-flight mutations.
///
/// Issue a ticket before sending a mutation; merge the response only if
/// the ticket is still the latest issued for that row.
#[derive(Debug, Default)]
pub struct MutationGuard {
    issued: HashMap<String, u64>,
    counter: u64,
}

impl MutationGuard {
    pub fn issue(&mut self, id: &str) -> u64 {
        self.counter += 1;
        self.issued.insert(id.to_string(), self.counter);
        self.counter
    }

    pub fn is_current(&self, id: &str, ticket: u64) -> bool {
        self.issued.get(id) == Some(&ticket)
    }
}

/// Set the `available` flag on the row matching `id`.
/// Returns false when no row matches.
pub fn apply_availability(items: &mut Vec<MenuItem>, id: &str, available: bool) -> bool {
    match items.iter_mut().find(|item| item.id.as_deref() == Some(id)) {
        Some(item) => {
            item.available = available;
            true
        }
        None => false,
    }
}

/// Replace the row matching `edited.id` with the full edited object.
/// Returns false when no row matches (or `edited` is still a draft).
pub fn replace_item(items: &mut Vec<MenuItem>, edited: &MenuItem) -> bool {
    let Some(id) = edited.id.as_deref() else {
        return false;
    };
    match items.iter_mut().find(|item| item.id.as_deref() == Some(id)) {
        Some(item) => {
            *item = edited.clone();
            true
        }
        None => false,
    }
}

/// Append rows returned by an insert to the held list.
pub fn append_created(items: &mut Vec<MenuItem>, rows: Vec<MenuItem>) {
    items.extend(rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn make_item(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: Some(id.to_string()),
            name: name.to_string(),
            description: String::new(),
            price,
            category: "Main".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_toggle_flips_exactly_one_row() {
        let mut items = vec![
            make_item("1", "Risotto", 14.0),
            make_item("2", "Gnocchi", 13.0),
            make_item("3", "Polenta", 11.0),
        ];
        let before = items.clone();

        assert!(apply_availability(&mut items, "2", false));

        assert!(!items[1].available);
        assert_eq!(items[0], before[0]);
        assert_eq!(items[2], before[2]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_toggle_unknown_id_leaves_list_unchanged() {
        let mut items = vec![make_item("1", "Risotto", 14.0)];
        let before = items.clone();

        assert!(!apply_availability(&mut items, "9", false));

        assert_eq!(items, before);
    }

    #[test]
    fn test_update_replaces_field_for_field() {
        let mut items = vec![make_item("7", "Soup", 5.0), make_item("8", "Salad", 6.0)];

        let mut edited = make_item("7", "Tomato Soup", 5.5);
        edited.description = "Slow roasted".to_string();
        assert!(replace_item(&mut items, &edited));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], edited);
        assert_eq!(items[1].name, "Salad");
    }

    #[test]
    fn test_update_with_draft_is_rejected() {
        let mut items = vec![make_item("1", "Risotto", 14.0)];
        let draft = MenuItem::draft();

        assert!(!replace_item(&mut items, &draft));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_create_appends_returned_rows() {
        let mut items = vec![make_item("1", "Risotto", 14.0)];

        let mut created = make_item("42", "Lemonade", 3.0);
        created.category = "Drink".to_string();
        append_created(&mut items, vec![created.clone()]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id.as_deref(), Some("42"));
        assert_eq!(items[1], created);
    }

    #[test]
    fn test_guard_keeps_latest_ticket_only() {
        let mut guard = MutationGuard::default();

        let first = guard.issue("7");
        let second = guard.issue("7");

        assert!(!guard.is_current("7", first));
        assert!(guard.is_current("7", second));
    }

    #[test]
    fn test_guard_tracks_entities_independently() {
        let mut guard = MutationGuard::default();

        let seven = guard.issue("7");
        let eight = guard.issue("8");

        assert!(guard.is_current("7", seven));
        assert!(guard.is_current("8", eight));
    }

    #[test]
    fn test_stale_response_is_not_merged() {
        // Two rapid edits on the same row whose responses resolve out of
        // order: only the later-issued edit may land in the held list.
        let mut guard = MutationGuard::default();
        let mut items = vec![make_item("7", "Soup", 5.0)];

        let first = guard.issue("7");
        let second = guard.issue("7");

        // Later edit's response arrives first and merges.
        if guard.is_current("7", second) {
            replace_item(&mut items, &make_item("7", "Tomato Soup", 5.5));
        }
        // Earlier edit's response straggles in and is discarded.
        if guard.is_current("7", first) {
            replace_item(&mut items, &make_item("7", "Minestrone", 6.0));
        }

        assert_eq!(items[0].name, "Tomato Soup");
        assert_eq!(items[0].price, 5.5);
    }
}
