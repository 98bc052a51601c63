//! Subscription system for list replacements.
//!
//! Consumers never see the list change under them. Instead they are told
//! when a new snapshot replaces the old one:
//! - Adds, deletes, toggles and clears each publish one event
//! - Operations that match nothing publish nothing
//!
//! Subscriptions support:
//! - Filtering by kind of change
//! - Receiving the current snapshot right away
//! - Bounded buffers with slow-subscriber dropping
//!
//! # Example
//!
//! ```ignore
//! let list = PackingList::new(ListConfig::default())?;
//!
//! let handle = list.subscribe(SubscriptionConfig {
//!     replay_current: true,
//!     ..Default::default()
//! });
//!
//! loop {
//!     match handle.recv() {
//!         Ok(ListEvent::Current { snapshot }) => render(&snapshot),
//!         Ok(ListEvent::Replaced { snapshot, .. }) => render(&snapshot),
//!         Ok(ListEvent::Dropped { .. }) | Err(_) => break,
//!     }
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    DropReason, ListEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId,
};
