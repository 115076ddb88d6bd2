//! Checklist
//!
//! Headless item store. The reactive store in the UI crate delegates to
//! [`toggle_item`] so both renditions share one toggle rule.

use crate::aggregate::{Aggregates, RoundingPolicy};
use crate::error::{ChecklistError, ChecklistResult};
use crate::item::Item;

/// Flip the done flag of the item with `id`, returning the new flag
pub fn toggle_item(items: &mut [Item], id: u32) -> ChecklistResult<bool> {
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(ChecklistError::UnknownItem { id })?;
    item.done = !item.done;
    Ok(item.done)
}

/// Ordered sequence of items under management
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<Item>,
}

impl Checklist {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Replace the whole list. Duplicate ids are not checked.
    pub fn seed(&mut self, items: Vec<Item>) {
        log::debug!(target: "checklist", "seed: {} items", items.len());
        self.items = items;
    }

    /// Seed only when nothing is loaded yet; returns whether it seeded
    pub fn seed_if_empty(&mut self, items: Vec<Item>) -> bool {
        if self.items.is_empty() {
            self.seed(items);
            true
        } else {
            false
        }
    }

    /// Back to the empty baseline
    pub fn reset(&mut self) {
        self.seed(Vec::new());
    }

    /// Toggle by id, reporting unknown ids
    pub fn try_toggle(&mut self, id: u32) -> ChecklistResult<bool> {
        toggle_item(&mut self.items, id)
    }

    /// Toggle by id; an unknown id is a logged no-op
    pub fn toggle(&mut self, id: u32) {
        if let Err(err) = self.try_toggle(id) {
            log::warn!(target: "checklist", "toggle ignored: {}", err);
        }
    }

    /// Copy of the current items
    pub fn snapshot_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn aggregates(&self, rounding: RoundingPolicy) -> Aggregates {
        Aggregates::of(&self.items, rounding)
    }
}
