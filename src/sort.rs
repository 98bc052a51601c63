//! Display ordering for the list.
//!
//! Sorting is a view concern: it always works on a copy and leaves the
//! stored insertion order alone.

use crate::error::{ListError, Result};
use crate::types::Item;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How items are ordered for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Insertion order, as stored.
    #[default]
    Input,
    /// Alphabetical by description.
    Description,
    /// Unpacked first, then packed. Stable within each group.
    Packed,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Input, SortOrder::Description, SortOrder::Packed];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Input => "input",
            SortOrder::Description => "description",
            SortOrder::Packed => "packed",
        }
    }

    /// Human label for a selector.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Input => "Sort by input order",
            SortOrder::Description => "Sort by description",
            SortOrder::Packed => "Sort by packed status",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s.trim())
            .ok_or_else(|| ListError::InvalidSortOrder(s.to_string()))
    }
}

/// Compare two labels the way a reader would alphabetize them.
///
/// Levels, in order: base letters (accents and case ignored), accents,
/// case with lowercase first. The raw text breaks any remaining tie so the
/// order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| uppercase_marks(a).cmp(uppercase_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn uppercase_marks(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().map(char::is_uppercase)
}

/// Items in the requested order.
///
/// `Input` borrows the slice as is; the other orders return a sorted copy.
pub fn sort_items(items: &[Item], order: SortOrder) -> Cow<'_, [Item]> {
    match order {
        SortOrder::Input => Cow::Borrowed(items),
        SortOrder::Description => {
            let mut sorted = items.to_vec();
            sorted.sort_by(|a, b| locale_cmp(&a.description, &b.description));
            Cow::Owned(sorted)
        }
        SortOrder::Packed => {
            let mut sorted = items.to_vec();
            // sort_by_key is stable, so equal keys keep insertion order
            sorted.sort_by_key(|item| item.packed);
            Cow::Owned(sorted)
        }
    }
}
