//! # Packing List
//!
//! An in-memory packing list whose every version is an immutable snapshot.
//!
//! ## Core Concepts
//!
//! - **Items**: description, quantity, packed flag and a unique id
//! - **Snapshots**: each add/delete/toggle/clear publishes a new version;
//!   older versions never change
//! - **Derived views**: sorted orders and completion statistics are computed
//!   on demand and never touch the stored order
//! - **Subscriptions**: consumers are notified when a snapshot is replaced
//!
//! ## Example
//!
//! ```ignore
//! use packlist::{ItemInput, ListConfig, PackingList, SortOrder};
//!
//! let list = PackingList::new(ListConfig::with_seed(packlist::sample_items()))?;
//!
//! let snapshot = list.add_new(ItemInput::new("Sunscreen", 1))?;
//! let charger = snapshot[2].id;
//! list.toggle(charger);
//!
//! for item in list.sorted(SortOrder::Description) {
//!     println!("{} {}", item.quantity, item.description);
//! }
//! println!("{}", list.stats());
//!
//! // Clearing asks first
//! list.clear_with(&|prompt: &str| ask_user(prompt));
//! ```

pub mod config;
pub mod confirm;
pub mod error;
pub mod form;
pub mod ids;
pub mod list;
pub mod manager;
pub mod sort;
pub mod stats;
pub mod subscriptions;
pub mod types;
pub mod view;

// Re-exports
pub use config::{sample_items, ListConfig, DEFAULT_MAX_QUANTITY};
pub use confirm::{Confirm, CLEAR_PROMPT};
pub use error::{ListError, Result};
pub use form::AddForm;
pub use ids::{IdGenerator, IdScheme, SequentialIds, TimestampIds};
pub use list::{apply_operation, validate_item, ChangeKind, ListOperation, ListSnapshot};
pub use manager::{ClearOutcome, PackingList};
pub use sort::{locale_cmp, sort_items, SortOrder};
pub use stats::Stats;
pub use subscriptions::{
    DropReason, ListEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId, SubscriptionManager,
};
pub use types::*;
pub use view::{ItemRow, ListView};
