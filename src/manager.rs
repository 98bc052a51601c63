//! The packing list itself, tying operations, ids and subscriptions together.

use crate::config::ListConfig;
use crate::confirm::{Confirm, CLEAR_PROMPT};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::list::{apply_operation, validate_item, ChangeKind, ListOperation, ListSnapshot};
use crate::sort::SortOrder;
use crate::stats::Stats;
use crate::subscriptions::{
    SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::{Item, ItemId, ItemInput, Version};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Result of a confirmed clear.
#[derive(Clone, Debug)]
pub enum ClearOutcome {
    /// The user agreed; this is the new, empty snapshot.
    Cleared(ListSnapshot),
    /// The user declined; the list is unchanged.
    Cancelled,
}

impl ClearOutcome {
    pub fn is_cleared(&self) -> bool {
        matches!(self, ClearOutcome::Cleared(_))
    }
}

/// The authoritative packing list.
///
/// Provides a unified interface for:
/// - Adding, deleting, toggling and clearing items
/// - Reading immutable snapshots and derived views
/// - Subscribing to snapshot replacements
///
/// Every change publishes a new [`ListSnapshot`]; snapshots handed out
/// earlier stay exactly as they were.
pub struct PackingList {
    /// List configuration.
    config: ListConfig,

    /// Current version.
    current: RwLock<ListSnapshot>,

    /// Source of ids for `add_new`.
    ids: Box<dyn IdGenerator>,

    /// Change subscriptions.
    subscriptions: SubscriptionManager,

    /// Lock for write operations to ensure atomicity.
    write_lock: Mutex<()>,
}

impl PackingList {
    /// Build a list from a config, validating the seed items.
    pub fn new(config: ListConfig) -> Result<Self> {
        let ids = config.id_scheme.generator();
        Self::with_generator(config, ids)
    }

    /// Build a list that draws ids from a custom generator.
    pub fn with_generator(config: ListConfig, ids: Box<dyn IdGenerator>) -> Result<Self> {
        config.validate()?;

        for item in &config.seed {
            ids.observe(item.id);
        }

        let current = ListSnapshot::new(Version(0), config.seed.clone());
        info!(
            items = current.len(),
            id_scheme = ?config.id_scheme,
            "packing list created"
        );

        Ok(Self {
            config,
            current: RwLock::new(current),
            ids,
            subscriptions: SubscriptionManager::new(),
            write_lock: Mutex::new(()),
        })
    }

    /// Build a list holding these items.
    pub fn with_items(items: Vec<Item>) -> Result<Self> {
        Self::new(ListConfig::with_seed(items))
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    // --- Reads ---

    /// The current snapshot.
    pub fn snapshot(&self) -> ListSnapshot {
        self.current.read().clone()
    }

    pub fn version(&self) -> Version {
        self.current.read().version()
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }

    /// Look up an item in the current snapshot.
    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.current.read().get(id).cloned()
    }

    /// Current items in display order.
    pub fn sorted(&self, order: SortOrder) -> Vec<Item> {
        self.snapshot().sorted(order).into_owned()
    }

    /// Completion statistics for the current snapshot.
    pub fn stats(&self) -> Stats {
        self.current.read().stats()
    }

    // --- Writes ---

    /// Append a fully formed item.
    ///
    /// Rejects items with an empty description, a zero quantity, or an id
    /// already in the list. A rejected item leaves the list unchanged.
    pub fn add(&self, item: Item) -> Result<ListSnapshot> {
        self.apply(ListOperation::Add { item })
    }

    /// Create an unpacked item with a fresh id and append it.
    pub fn add_new(&self, input: ItemInput) -> Result<ListSnapshot> {
        // Validate before drawing an id so rejected input burns nothing
        let candidate = Item::new(ItemId(0), input.description.as_str(), input.quantity);
        if let Err(e) = validate_item(&[], &candidate) {
            warn!(error = %e, "item rejected");
            return Err(e);
        }

        let id = self.ids.next_id().map_err(|e| {
            warn!(error = %e, "item rejected");
            e
        })?;
        self.add(input.into_item(id))
    }

    /// Remove an item. Unknown ids leave the list unchanged.
    pub fn delete(&self, id: ItemId) -> ListSnapshot {
        self.apply_total(ListOperation::Delete { id })
    }

    /// Flip an item's packed flag. Unknown ids leave the list unchanged.
    pub fn toggle(&self, id: ItemId) -> ListSnapshot {
        self.apply_total(ListOperation::Toggle { id })
    }

    /// Empty the list unconditionally.
    pub fn clear(&self) -> ListSnapshot {
        self.apply_total(ListOperation::Clear)
    }

    /// Ask first, then empty the list if the answer is yes.
    pub fn clear_with(&self, confirm: &impl Confirm) -> ClearOutcome {
        if !confirm.confirm(CLEAR_PROMPT) {
            debug!("clear cancelled");
            return ClearOutcome::Cancelled;
        }
        ClearOutcome::Cleared(self.clear())
    }

    /// Apply any operation and return the resulting snapshot.
    pub fn apply(&self, operation: ListOperation) -> Result<ListSnapshot> {
        let _lock = self.write_lock.lock();

        let current = self.snapshot();
        let kind = operation.kind();

        let next = match apply_operation(current.items(), &operation) {
            Ok(Some(items)) => items,
            Ok(None) => {
                debug!(?operation, "no matching item, list unchanged");
                return Ok(current);
            }
            Err(e) => {
                warn!(error = %e, "item rejected");
                return Err(e);
            }
        };

        let snapshot = ListSnapshot::new(current.version().next(), next);
        *self.current.write() = snapshot.clone();

        if let ListOperation::Add { item } = &operation {
            self.ids.observe(item.id);
        }

        match kind {
            ChangeKind::Cleared => {
                info!(removed = current.len(), version = snapshot.version().0, "list cleared")
            }
            _ => debug!(
                change = ?kind,
                items = snapshot.len(),
                version = snapshot.version().0,
                "list replaced"
            ),
        }

        self.subscriptions.broadcast_replaced(kind, &snapshot);
        Ok(snapshot)
    }

    // Delete, toggle and clear cannot be rejected.
    fn apply_total(&self, operation: ListOperation) -> ListSnapshot {
        match self.apply(operation) {
            Ok(snapshot) => snapshot,
            Err(_) => self.snapshot(),
        }
    }

    // --- Subscriptions ---

    /// Subscribe to snapshot replacements.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        // Hold the write lock so no replacement slips between the replayed
        // snapshot and the first live event.
        let _lock = self.write_lock.lock();
        let current = self.snapshot();
        self.subscriptions.subscribe(config, Some(&current))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.subscription_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_items;
    use crate::error::ListError;

    #[test]
    fn test_seeded_list() {
        let list = PackingList::with_items(sample_items()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.version(), Version(0));
    }

    #[test]
    fn test_add_new_assigns_fresh_id() {
        let list = PackingList::with_items(sample_items()).unwrap();
        let snapshot = list.add_new(ItemInput::new("Sunscreen", 1)).unwrap();

        let added = snapshot.last().unwrap();
        assert_eq!(added.id, ItemId(4));
        assert!(!added.packed);
        assert_eq!(snapshot.version(), Version(1));
    }

    #[test]
    fn test_add_new_rejection_keeps_ids() {
        let list = PackingList::with_items(sample_items()).unwrap();
        let result = list.add_new(ItemInput::new("", 1));
        assert!(matches!(result, Err(ListError::EmptyDescription)));

        let snapshot = list.add_new(ItemInput::new("Hat", 1)).unwrap();
        assert_eq!(snapshot.last().unwrap().id, ItemId(4));
    }

    #[test]
    fn test_caller_ids_are_observed() {
        let list = PackingList::with_items(Vec::new()).unwrap();
        list.add(Item::new(ItemId(50), "Tent", 1)).unwrap();

        let snapshot = list.add_new(ItemInput::new("Stove", 1)).unwrap();
        assert_eq!(snapshot.last().unwrap().id, ItemId(51));
    }

    #[test]
    fn test_rejected_add_does_not_advance_ids() {
        let list = PackingList::with_items(sample_items()).unwrap();
        let result = list.add(Item::new(ItemId(100), "", 1));
        assert!(matches!(result, Err(ListError::EmptyDescription)));

        let snapshot = list.add_new(ItemInput::new("Hat", 1)).unwrap();
        assert_eq!(snapshot.last().unwrap().id, ItemId(4));
    }

    #[test]
    fn test_add_new_after_max_id_reports_exhaustion() {
        let list = PackingList::with_items(sample_items()).unwrap();
        list.add(Item::new(ItemId(u64::MAX), "Tent", 1)).unwrap();
        let before = list.snapshot();

        let result = list.add_new(ItemInput::new("Stove", 1));
        assert!(matches!(result, Err(ListError::IdsExhausted)));
        assert!(list.snapshot().same_as(&before));

        // Caller-supplied ids still work
        let snapshot = list.add(Item::new(ItemId(5), "Stove", 1)).unwrap();
        assert_eq!(snapshot.len(), 5);
    }

    #[test]
    fn test_noop_returns_same_snapshot() {
        let list = PackingList::with_items(sample_items()).unwrap();
        let before = list.snapshot();

        let after = list.toggle(ItemId(99));
        assert!(after.same_as(&before));
        assert_eq!(list.version(), Version(0));
    }

    #[test]
    fn test_clear_with_declined() {
        let list = PackingList::with_items(sample_items()).unwrap();
        let outcome = list.clear_with(&false);

        assert!(!outcome.is_cleared());
        assert_eq!(list.len(), 3);
    }
}
