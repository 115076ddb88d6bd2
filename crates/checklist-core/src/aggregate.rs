//! Derived Aggregates
//!
//! Pure functions over a checklist slice. Nothing here caches, so a value
//! computed after a mutation always reflects that mutation.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// How `percent` resolves an exact `.5` boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// 12.5 -> 13, 62.5 -> 63
    #[default]
    HalfUp,
    /// 12.5 -> 12, 62.5 -> 62
    HalfEven,
}

impl RoundingPolicy {
    /// Round `numerator / denominator` to an integer. `denominator` must be non-zero.
    fn round_ratio(self, numerator: usize, denominator: usize) -> usize {
        let quotient = numerator / denominator;
        let twice_rem = 2 * (numerator % denominator);
        if twice_rem > denominator {
            quotient + 1
        } else if twice_rem < denominator {
            quotient
        } else {
            match self {
                RoundingPolicy::HalfUp => quotient + 1,
                RoundingPolicy::HalfEven => quotient + (quotient % 2),
            }
        }
    }
}

/// Number of items with `done == true`
pub fn completed(items: &[Item]) -> usize {
    items.iter().filter(|item| item.done).count()
}

/// Completion percentage in `[0, 100]`; `0` for an empty list
pub fn percent(items: &[Item], rounding: RoundingPolicy) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let rounded = rounding.round_ratio(100 * completed(items), items.len());
    // completed <= total, so the ratio never exceeds 100
    rounded.min(100) as u8
}

/// All derived values of a checklist, computed in one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Aggregates {
    pub completed: usize,
    pub percent: u8,
    pub total: usize,
}

impl Aggregates {
    pub fn of(items: &[Item], rounding: RoundingPolicy) -> Self {
        Self {
            completed: completed(items),
            percent: percent(items, rounding),
            total: items.len(),
        }
    }
}
