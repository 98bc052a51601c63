use crate::sort::{sort_items, SortOrder};
use crate::stats::Stats;
use crate::types::{Item, ItemId, Version};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

/// One immutable version of the list.
///
/// Cloning is cheap and shares the items. A snapshot never changes after it
/// is created; it only goes stale when the owner publishes a newer one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListSnapshot {
    version: Version,
    items: Arc<[Item]>,
}

impl ListSnapshot {
    pub fn new(version: Version, items: Vec<Item>) -> Self {
        Self {
            version,
            items: items.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Version::default(), Vec::new())
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// True if both handles point at the very same version.
    pub fn same_as(&self, other: &ListSnapshot) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Items in the requested display order. The snapshot itself is untouched.
    pub fn sorted(&self, order: SortOrder) -> Cow<'_, [Item]> {
        sort_items(&self.items, order)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_items(&self.items)
    }
}

impl Deref for ListSnapshot {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.items
    }
}

impl PartialEq for ListSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.items == other.items
    }
}

impl Eq for ListSnapshot {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_items() {
        let snapshot = ListSnapshot::new(Version(1), vec![Item::new(ItemId(1), "Hat", 1)]);
        let copy = snapshot.clone();
        assert!(copy.same_as(&snapshot));
        assert_eq!(copy, snapshot);
    }

    #[test]
    fn test_equal_content_is_not_same() {
        let a = ListSnapshot::new(Version(1), vec![Item::new(ItemId(1), "Hat", 1)]);
        let b = ListSnapshot::new(Version(1), vec![Item::new(ItemId(1), "Hat", 1)]);
        assert_eq!(a, b);
        assert!(!a.same_as(&b));
    }

    #[test]
    fn test_get() {
        let snapshot = ListSnapshot::new(
            Version(1),
            vec![Item::new(ItemId(1), "Hat", 1), Item::new(ItemId(5), "Map", 1)],
        );
        assert_eq!(snapshot.get(ItemId(5)).map(|i| i.description.as_str()), Some("Map"));
        assert!(snapshot.get(ItemId(2)).is_none());
        assert_eq!(snapshot.len(), 2);
    }
}
