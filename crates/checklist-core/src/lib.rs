//! Checklist Core
//!
//! Domain layer for the progress checklist: items, derived aggregates,
//! the submit-gated snapshot and the demo seeds.
//! This crate has no UI dependencies, so everything here runs natively.

mod item;
mod error;
mod aggregate;
mod checklist;
mod snapshot;
mod config;
pub mod seeds;

#[cfg(test)]
mod tests;

pub use item::Item;
pub use error::{ChecklistError, ChecklistResult};
pub use aggregate::{completed, percent, Aggregates, RoundingPolicy};
pub use checklist::{toggle_item, Checklist};
pub use snapshot::{ProgressSnapshot, SubmitGate};
pub use config::{ChecklistConfig, InitialSnapshotPolicy};
