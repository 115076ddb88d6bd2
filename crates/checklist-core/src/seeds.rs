//! Demo Seeds
//!
//! Named item lists used by the demo page and by tests to start every
//! scenario from a known baseline.

use thiserror::Error;

use crate::item::Item;

/// Seed names, in picker order
pub const SEED_NAMES: &[&str] = &["default", "mixed", "none", "all", "long-labels"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("unknown seed: {0}")]
    Unknown(String),
}

fn numbered(count: u32, done: impl Fn(u32) -> bool) -> Vec<Item> {
    (1..=count)
        .map(|id| Item::with_done(id, format!("Item {}", id), done(id)))
        .collect()
}

/// Item 1..5, all unchecked
pub fn default_items() -> Vec<Item> {
    numbered(5, |_| false)
}

/// Item 1..5 with items 1 and 3 done
pub fn mixed() -> Vec<Item> {
    numbered(5, |id| id == 1 || id == 3)
}

pub fn none() -> Vec<Item> {
    numbered(3, |_| false)
}

pub fn all() -> Vec<Item> {
    numbered(3, |_| true)
}

/// Labels long enough to wrap in narrow containers
pub fn long_labels() -> Vec<Item> {
    vec![
        Item::new(
            1,
            "A very long descriptive label to verify wrapping and accessibility across various viewport widths",
        ),
        Item::with_done(
            2,
            "Another extremely verbose label that should not break the layout or cause overflow in compact containers",
            true,
        ),
        Item::new(3, "Short one for contrast"),
    ]
}

/// Look a seed up by name
pub fn by_name(name: &str) -> Result<Vec<Item>, SeedError> {
    match name {
        "default" => Ok(default_items()),
        "mixed" => Ok(mixed()),
        "none" => Ok(none()),
        "all" => Ok(all()),
        "long-labels" => Ok(long_labels()),
        other => Err(SeedError::Unknown(other.to_string())),
    }
}
