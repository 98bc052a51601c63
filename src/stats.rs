//! Completion statistics derived from the list.

use crate::types::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of how much is packed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Stats {
    /// Nothing on the list yet. There is no percentage to report.
    Empty,

    /// At least one item.
    Progress {
        total: usize,
        packed: usize,
        /// `packed / total * 100`, rounded half up.
        percentage: u8,
    },
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        if total == 0 {
            return Stats::Empty;
        }

        let packed = items.iter().filter(|item| item.packed).count();
        Stats::Progress {
            total,
            packed,
            percentage: percentage(packed, total),
        }
    }

    pub fn total(&self) -> usize {
        match self {
            Stats::Empty => 0,
            Stats::Progress { total, .. } => *total,
        }
    }

    pub fn packed(&self) -> usize {
        match self {
            Stats::Empty => 0,
            Stats::Progress { packed, .. } => *packed,
        }
    }

    /// `None` for an empty list.
    pub fn percentage(&self) -> Option<u8> {
        match self {
            Stats::Empty => None,
            Stats::Progress { percentage, .. } => Some(*percentage),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stats::Empty)
    }

    /// Everything packed (percentage reads 100).
    pub fn is_complete(&self) -> bool {
        self.percentage() == Some(100)
    }
}

// Integer form of round(packed / total * 100) with halves rounding up.
fn percentage(packed: usize, total: usize) -> u8 {
    let scaled = (packed as u128 * 200 + total as u128) / (total as u128 * 2);
    scaled.min(100) as u8
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stats::Empty => write!(f, "Start adding some items to your packing list 🚀"),
            _ if self.is_complete() => write!(f, "You got everything! Ready to go ✈️"),
            Stats::Progress {
                total,
                packed,
                percentage,
            } => write!(
                f,
                "💼 You have {} items on your list, and you already packed {} ({}%)",
                total, packed, percentage
            ),
        }
    }
}
