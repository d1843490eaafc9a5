//! Admin State Store
//!
//! Holds the full item list the admin view works against, using Leptos
//! reactive_stores for fine-grained reactivity. Merge semantics live in
//! `sync`; these helpers only route them through the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::MenuItem;
use crate::sync;

/// Admin-held state
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Every row of `menu_items`, available or not
    pub items: Vec<MenuItem>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole held list after a load
pub fn store_replace_items(store: &AdminStore, rows: Vec<MenuItem>) {
    store.items().set(rows);
}

/// Merge a confirmed availability toggle by id
pub fn store_apply_availability(store: &AdminStore, id: &str, available: bool) {
    sync::apply_availability(&mut store.items().write(), id, available);
}

/// Merge a confirmed edit by id
pub fn store_replace_item(store: &AdminStore, edited: &MenuItem) {
    sync::replace_item(&mut store.items().write(), edited);
}

/// Append rows returned by a confirmed insert
pub fn store_append_created(store: &AdminStore, rows: Vec<MenuItem>) {
    sync::append_created(&mut store.items().write(), rows);
}
