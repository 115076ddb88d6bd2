//! Submitted Snapshot
//!
//! The frozen copy of the aggregates captured by the last submit. It is the
//! only thing the progress label is rendered from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::{Aggregates, RoundingPolicy};
use crate::config::{ChecklistConfig, InitialSnapshotPolicy};
use crate::item::Item;

/// Values shown by the progress label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub percent: u8,
    pub total: usize,
}

impl ProgressSnapshot {
    /// `0/total (0%)`
    pub fn zero(total: usize) -> Self {
        Self {
            completed: 0,
            percent: 0,
            total,
        }
    }

    /// Snapshot a view starts with, per the configured policy
    pub fn initial(items: &[Item], config: &ChecklistConfig) -> Self {
        match config.initial_snapshot {
            InitialSnapshotPolicy::Zero => Self::zero(items.len()),
            InitialSnapshotPolicy::FromItems => Aggregates::of(items, config.rounding).into(),
        }
    }

    /// Rendered label text
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl From<Aggregates> for ProgressSnapshot {
    fn from(agg: Aggregates) -> Self {
        Self {
            completed: agg.completed,
            percent: agg.percent,
            total: agg.total,
        }
    }
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.completed, self.total, self.percent)
    }
}

/// Submit-gated view state: `Idle(snapshot)`
///
/// Toggles never touch the gate; only [`SubmitGate::submit`] replaces the
/// snapshot, and it does so wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitGate {
    snapshot: ProgressSnapshot,
    rounding: RoundingPolicy,
}

impl SubmitGate {
    /// Start a view against the items present at mount
    pub fn mount(items: &[Item], config: &ChecklistConfig) -> Self {
        Self {
            snapshot: ProgressSnapshot::initial(items, config),
            rounding: config.rounding,
        }
    }

    /// Capture the current aggregates as the new snapshot
    pub fn submit(&mut self, items: &[Item]) -> ProgressSnapshot {
        self.capture(Aggregates::of(items, self.rounding))
    }

    /// Same as [`SubmitGate::submit`] for callers holding precomputed aggregates
    pub fn capture(&mut self, aggregates: Aggregates) -> ProgressSnapshot {
        self.snapshot = aggregates.into();
        self.snapshot
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.snapshot
    }

    pub fn label(&self) -> String {
        self.snapshot.label()
    }
}
