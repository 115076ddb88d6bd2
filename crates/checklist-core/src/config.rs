//! Checklist Configuration

use serde::{Deserialize, Serialize};

use crate::aggregate::RoundingPolicy;

/// What the progress label shows before the first submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialSnapshotPolicy {
    /// `0/N (0%)` regardless of pre-checked items
    #[default]
    Zero,
    /// As if a submit already happened against the mount-time items
    FromItems,
}

/// Behavior knobs for one checklist view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    pub initial_snapshot: InitialSnapshotPolicy,
    pub rounding: RoundingPolicy,
}
