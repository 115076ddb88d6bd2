//! Checklist State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. A store is
//! created per mounted checklist (see `ChecklistContext`), never shared
//! process-wide.

use leptos::prelude::*;
use reactive_stores::Store;

use checklist_core::{toggle_item, Item};

/// Checklist state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ChecklistState {
    /// Items in display order
    pub items: Vec<Item>,
    /// Incremented on every seed; the view remounts once per generation
    pub generation: u32,
}

/// Type alias for the store
pub type ChecklistStore = Store<ChecklistState>;

// ========================
// Store Helper Functions
// ========================

/// Replace all items and start a new generation
pub fn store_seed(store: &ChecklistStore, items: Vec<Item>) {
    log::debug!(target: "store", "seed: {} items", items.len());
    *store.items().write() = items;
    *store.generation().write() += 1;
}

/// Seed only when the store holds no items; returns whether it seeded
pub fn store_seed_if_empty(store: &ChecklistStore, items: Vec<Item>) -> bool {
    if store.items().with_untracked(|current| current.is_empty()) {
        store_seed(store, items);
        true
    } else {
        false
    }
}

/// Clear the store back to the empty baseline
pub fn store_reset(store: &ChecklistStore) {
    store_seed(store, Vec::new());
}

/// Flip one item's done flag; unknown ids are logged and ignored
pub fn store_toggle_item(store: &ChecklistStore, id: u32) {
    let result = toggle_item(store.items().write().as_mut_slice(), id);
    match result {
        Ok(done) => log::debug!(target: "store", "toggle {}: done={}", id, done),
        Err(err) => log::warn!(target: "store", "toggle ignored: {}", err),
    }
}

/// Copy of the current items
pub fn store_snapshot_items(store: &ChecklistStore) -> Vec<Item> {
    store.items().get_untracked()
}
