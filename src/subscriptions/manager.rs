//! Subscription manager for broadcasting list replacements.

use crate::list::{ChangeKind, ListSnapshot};
use crossbeam_channel::{bounded, Sender, TrySendError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

use super::types::{
    DropReason, ListEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
};

/// Outcome of a non-blocking send.
enum Delivery {
    Sent,
    Full,
    Disconnected,
}

/// Internal subscription state.
struct Subscription {
    config: SubscriptionConfig,
    sender: Sender<ListEvent>,
}

impl Subscription {
    fn try_send(&self, event: ListEvent) -> Delivery {
        match self.sender.try_send(event) {
            Ok(()) => Delivery::Sent,
            Err(TrySendError::Full(_)) => Delivery::Full,
            Err(TrySendError::Disconnected(_)) => Delivery::Disconnected,
        }
    }

    fn wants(&self, kind: ChangeKind) -> bool {
        self.config.filter.matches(kind)
    }
}

/// Manages subscriptions and broadcasts events.
pub struct SubscriptionManager {
    /// Active subscriptions by ID.
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
}

impl SubscriptionManager {
    /// Create a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a new subscription.
    ///
    /// When the config asks for it, `current` is queued as a
    /// [`ListEvent::Current`] before any replacement can arrive.
    pub fn subscribe(
        &self,
        config: SubscriptionConfig,
        current: Option<&ListSnapshot>,
    ) -> SubscriptionHandle {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        // A zero-capacity channel would reject every try_send
        let (sender, receiver) = bounded(config.buffer_size.max(1));

        if config.replay_current {
            if let Some(snapshot) = current {
                // Fresh channel with room for at least one event
                let _ = sender.try_send(ListEvent::Current {
                    snapshot: snapshot.clone(),
                });
            }
        }

        debug!(subscription = id.0, buffer = config.buffer_size, "subscribed");
        self.subscriptions
            .write()
            .insert(id, Subscription { config, sender });

        SubscriptionHandle { id, receiver }
    }

    /// Unsubscribe and clean up.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subs = self.subscriptions.write();
        if let Some(sub) = subs.remove(&id) {
            // Send dropped event (best effort)
            let _ = sub.try_send(ListEvent::Dropped {
                reason: DropReason::Unsubscribed,
            });
            debug!(subscription = id.0, "unsubscribed");
        }
    }

    /// Get subscription count.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Broadcast a replacement to matching subscriptions.
    ///
    /// Subscribers with a full buffer are dropped; subscribers whose
    /// receiver is gone are forgotten.
    pub fn broadcast_replaced(&self, change: ChangeKind, snapshot: &ListSnapshot) {
        let event = ListEvent::Replaced {
            change,
            snapshot: snapshot.clone(),
        };

        let mut overflowed = Vec::new();
        let mut disconnected = Vec::new();

        {
            let subs = self.subscriptions.read();
            for (id, sub) in subs.iter() {
                if !sub.wants(change) {
                    continue;
                }
                match sub.try_send(event.clone()) {
                    Delivery::Sent => {}
                    Delivery::Full => overflowed.push(*id),
                    Delivery::Disconnected => disconnected.push(*id),
                }
            }
        }

        if overflowed.is_empty() && disconnected.is_empty() {
            return;
        }

        let mut subs = self.subscriptions.write();
        for id in disconnected {
            subs.remove(&id);
            debug!(subscription = id.0, "receiver gone, subscription removed");
        }
        for id in overflowed {
            if let Some(sub) = subs.remove(&id) {
                warn!(subscription = id.0, "subscriber too slow, dropping");
                // Try to notify about the drop (might fail, that's ok)
                let _ = sub.try_send(ListEvent::Dropped {
                    reason: DropReason::BufferOverflow,
                });
            }
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}
