//! Checklist Context
//!
//! Shared state provided via Leptos Context API. Whoever mounts a checklist
//! builds one context, seeds it and provides it to the subtree.

use leptos::prelude::*;
use reactive_stores::Store;

use checklist_core::{Aggregates, ChecklistConfig, Item, ProgressSnapshot};

use crate::store::{
    store_reset, store_seed, store_seed_if_empty, store_snapshot_items, store_toggle_item,
    ChecklistState, ChecklistStateStoreFields, ChecklistStore,
};

/// Store, live aggregates and config for one checklist
#[derive(Clone, Copy)]
pub struct ChecklistContext {
    pub store: ChecklistStore,
    /// Recomputed from `store.items` after every mutation
    pub aggregates: Memo<Aggregates>,
    pub config: ChecklistConfig,
}

impl ChecklistContext {
    pub fn new(config: ChecklistConfig) -> Self {
        let store = Store::new(ChecklistState::default());
        let rounding = config.rounding;
        let aggregates =
            Memo::new(move |_| store.items().with(|items| Aggregates::of(items, rounding)));
        Self {
            store,
            aggregates,
            config,
        }
    }

    pub fn seed(&self, items: Vec<Item>) {
        store_seed(&self.store, items);
    }

    pub fn seed_if_empty(&self, items: Vec<Item>) -> bool {
        store_seed_if_empty(&self.store, items)
    }

    pub fn reset(&self) {
        store_reset(&self.store);
    }

    pub fn toggle(&self, id: u32) {
        store_toggle_item(&self.store, id);
    }

    pub fn snapshot_items(&self) -> Vec<Item> {
        store_snapshot_items(&self.store)
    }

    /// Tracked read of one item's done flag, `false` for unknown ids
    pub fn is_done(&self, id: u32) -> bool {
        self.store
            .items()
            .with(|items| items.iter().any(|item| item.id == id && item.done))
    }

    /// Snapshot a freshly mounted view starts from
    pub fn initial_snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::initial(&self.snapshot_items(), &self.config)
    }
}

/// Get the checklist context provided by an ancestor
pub fn use_checklist() -> ChecklistContext {
    expect_context::<ChecklistContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use checklist_core::{seeds, InitialSnapshotPolicy, RoundingPolicy};
    use leptos::reactive::owner::Owner;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    #[test]
    fn test_aggregates_follow_store() {
        with_owner(|| {
            let ctx = ChecklistContext::new(ChecklistConfig::default());
            ctx.seed(seeds::default_items());
            assert_eq!(ctx.aggregates.get_untracked(), Aggregates { completed: 0, percent: 0, total: 5 });

            ctx.toggle(1);
            ctx.toggle(2);
            assert_eq!(ctx.aggregates.get_untracked(), Aggregates { completed: 2, percent: 40, total: 5 });

            ctx.toggle(1);
            ctx.toggle(3);
            ctx.toggle(4);
            assert_eq!(ctx.aggregates.get_untracked(), Aggregates { completed: 3, percent: 60, total: 5 });

            ctx.reset();
            assert_eq!(ctx.aggregates.get_untracked(), Aggregates::default());
        });
    }

    #[test]
    fn test_rounding_reaches_memo() {
        with_owner(|| {
            let config = ChecklistConfig {
                rounding: RoundingPolicy::HalfEven,
                ..Default::default()
            };
            let ctx = ChecklistContext::new(config);
            ctx.seed((1..=8).map(|id| Item::new(id, format!("Item {id}"))).collect());
            ctx.toggle(8);
            assert_eq!(ctx.aggregates.get_untracked().percent, 12);
        });
    }

    #[test]
    fn test_is_done() {
        with_owner(|| {
            let ctx = ChecklistContext::new(ChecklistConfig::default());
            ctx.seed(seeds::mixed());
            assert!(ctx.is_done(1));
            assert!(!ctx.is_done(2));
            assert!(!ctx.is_done(99));
        });
    }

    #[test]
    fn test_initial_snapshot_policies() {
        with_owner(|| {
            let zero = ChecklistContext::new(ChecklistConfig::default());
            zero.seed(seeds::mixed());
            assert_eq!(zero.initial_snapshot().label(), "0/5 (0%)");

            let from_items = ChecklistContext::new(ChecklistConfig {
                initial_snapshot: InitialSnapshotPolicy::FromItems,
                ..Default::default()
            });
            from_items.seed(seeds::mixed());
            assert_eq!(from_items.initial_snapshot().label(), "2/5 (40%)");
        });
    }

    #[test]
    fn test_contexts_are_isolated() {
        with_owner(|| {
            let first = ChecklistContext::new(ChecklistConfig::default());
            let second = ChecklistContext::new(ChecklistConfig::default());
            first.seed(seeds::default_items());
            second.seed(seeds::default_items());

            first.toggle(1);
            assert_eq!(first.aggregates.get_untracked().completed, 1);
            assert_eq!(second.aggregates.get_untracked().completed, 0);
        });
    }
}
