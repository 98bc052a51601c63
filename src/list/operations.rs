//! List operation application.

use crate::error::{ListError, Result};
use crate::types::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// A change request against the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ListOperation {
    /// Append a fully formed item.
    Add { item: Item },

    /// Remove the item with this id.
    Delete { id: ItemId },

    /// Flip the packed flag of the item with this id.
    Toggle { id: ItemId },

    /// Drop every item.
    Clear,
}

impl ListOperation {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ListOperation::Add { .. } => ChangeKind::Added,
            ListOperation::Delete { .. } => ChangeKind::Deleted,
            ListOperation::Toggle { .. } => ChangeKind::Toggled,
            ListOperation::Clear => ChangeKind::Cleared,
        }
    }
}

/// What kind of operation produced a new list version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Deleted,
    Toggled,
    Cleared,
}

/// Check an item against the list it is about to join.
pub fn validate_item(items: &[Item], item: &Item) -> Result<()> {
    if item.description.is_empty() {
        return Err(ListError::EmptyDescription);
    }
    if item.quantity == 0 {
        return Err(ListError::InvalidQuantity(item.quantity));
    }
    if items.iter().any(|existing| existing.id == item.id) {
        return Err(ListError::DuplicateId(item.id));
    }
    Ok(())
}

/// Apply an operation to a list, producing the next list.
///
/// Returns `Ok(None)` when the operation matched nothing and the list is
/// unchanged. The input slice is never modified.
pub fn apply_operation(items: &[Item], operation: &ListOperation) -> Result<Option<Vec<Item>>> {
    match operation {
        ListOperation::Add { item } => {
            validate_item(items, item)?;

            let mut next = Vec::with_capacity(items.len() + 1);
            next.extend_from_slice(items);
            next.push(item.clone());
            Ok(Some(next))
        }

        ListOperation::Delete { id } => {
            if !items.iter().any(|item| item.id == *id) {
                return Ok(None);
            }

            Ok(Some(
                items.iter().filter(|item| item.id != *id).cloned().collect(),
            ))
        }

        ListOperation::Toggle { id } => {
            if !items.iter().any(|item| item.id == *id) {
                return Ok(None);
            }

            Ok(Some(
                items
                    .iter()
                    .map(|item| {
                        if item.id == *id {
                            item.toggled()
                        } else {
                            item.clone()
                        }
                    })
                    .collect(),
            ))
        }

        ListOperation::Clear => Ok(Some(Vec::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<Item> {
        vec![
            Item::new(ItemId(1), "Passports", 2),
            Item::new(ItemId(2), "Socks", 12).with_packed(true),
            Item::new(ItemId(3), "Charger", 1),
        ]
    }

    #[test]
    fn test_add_appends() {
        let items = seed();
        let op = ListOperation::Add {
            item: Item::new(ItemId(4), "Sunscreen", 1),
        };
        let next = apply_operation(&items, &op).unwrap().unwrap();

        assert_eq!(next.len(), 4);
        assert_eq!(next[3].description, "Sunscreen");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_add_rejects_empty_description() {
        let op = ListOperation::Add {
            item: Item::new(ItemId(4), "", 1),
        };
        let result = apply_operation(&seed(), &op);
        assert!(matches!(result, Err(ListError::EmptyDescription)));
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let op = ListOperation::Add {
            item: Item::new(ItemId(4), "Hat", 0),
        };
        let result = apply_operation(&seed(), &op);
        assert!(matches!(result, Err(ListError::InvalidQuantity(0))));
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let op = ListOperation::Add {
            item: Item::new(ItemId(2), "More socks", 3),
        };
        let result = apply_operation(&seed(), &op);
        assert!(matches!(result, Err(ListError::DuplicateId(ItemId(2)))));
    }

    #[test]
    fn test_delete() {
        let next = apply_operation(&seed(), &ListOperation::Delete { id: ItemId(2) })
            .unwrap()
            .unwrap();

        let ids: Vec<_> = next.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(3)]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let result = apply_operation(&seed(), &ListOperation::Delete { id: ItemId(99) }).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_toggle_only_target() {
        let items = seed();
        let next = apply_operation(&items, &ListOperation::Toggle { id: ItemId(3) })
            .unwrap()
            .unwrap();

        assert!(next[2].packed);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1], items[1]);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let result = apply_operation(&seed(), &ListOperation::Toggle { id: ItemId(42) }).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_clear() {
        let next = apply_operation(&seed(), &ListOperation::Clear).unwrap().unwrap();
        assert!(next.is_empty());

        // Clearing an empty list still yields a (new, empty) list
        let next = apply_operation(&[], &ListOperation::Clear).unwrap().unwrap();
        assert!(next.is_empty());
    }

    #[test]
    fn test_operation_json_shape() {
        let op: ListOperation = serde_json::from_str(r#"{"op": "toggle", "id": 3}"#).unwrap();
        assert_eq!(op, ListOperation::Toggle { id: ItemId(3) });
        assert_eq!(op.kind(), ChangeKind::Toggled);
    }
}
