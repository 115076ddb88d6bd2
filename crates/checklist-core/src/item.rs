//! Item Entity
//!
//! One checklist entry with identity, label and completion flag.

use serde::{Deserialize, Serialize};

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within its list, not necessarily contiguous
    pub id: u32,
    /// Display text
    pub label: String,
    /// Checkbox state
    pub done: bool,
}

impl Item {
    /// Create an unchecked item
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            done: false,
        }
    }

    /// Create an item with an explicit done flag
    pub fn with_done(id: u32, label: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            label: label.into(),
            done,
        }
    }
}
