//! Row projection for rendering the list.

use crate::error::Result;
use crate::list::ListSnapshot;
use crate::sort::SortOrder;
use crate::types::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// One rendered line of the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    pub id: ItemId,
    /// "{quantity} {description}"
    pub label: String,
    /// Packed rows are shown struck through.
    pub packed: bool,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            label: format!("{} {}", item.quantity, item.description),
            packed: item.packed,
        }
    }
}

/// Display state of the list: which order the user picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListView {
    order: SortOrder,
}

impl ListView {
    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Change the order from a selector value such as `"packed"`.
    pub fn select(&mut self, value: &str) -> Result<()> {
        self.order = value.parse()?;
        Ok(())
    }

    /// Rows for a snapshot, in the selected order.
    pub fn rows(&self, snapshot: &ListSnapshot) -> Vec<ItemRow> {
        snapshot.sorted(self.order).iter().map(ItemRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_items;
    use crate::error::ListError;
    use crate::types::Version;

    #[test]
    fn test_rows_follow_order() {
        let snapshot = ListSnapshot::new(Version(0), sample_items());
        let mut view = ListView::default();

        let labels: Vec<_> = view.rows(&snapshot).into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["2 Passports", "12 Socks", "1 Charger"]);

        view.select("packed").unwrap();
        let rows = view.rows(&snapshot);
        assert_eq!(rows.last().unwrap().label, "12 Socks");
        assert!(rows.last().unwrap().packed);
    }

    #[test]
    fn test_select_unknown_keeps_order() {
        let mut view = ListView::new(SortOrder::Description);
        assert!(matches!(view.select("size"), Err(ListError::InvalidSortOrder(_))));
        assert_eq!(view.order(), SortOrder::Description);
    }
}
