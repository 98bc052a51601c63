//! Immutable list versions and the operations that replace them.
//!
//! Every change produces a new item sequence. Operations that match nothing
//! (delete or toggle of an unknown id) report "unchanged" so the owner can
//! keep handing out the same snapshot.

mod operations;
mod snapshot;

pub use operations::{apply_operation, validate_item, ChangeKind, ListOperation};
pub use snapshot::ListSnapshot;
