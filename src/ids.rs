//! Identifier sources for new items.
//!
//! Uniqueness is the only contract. Every generator is told about ids that
//! enter the list from elsewhere (seed data, caller-built items) through
//! [`IdGenerator::observe`] so it never hands one of them out again.

use crate::error::{ListError, Result};
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Produces fresh item ids.
pub trait IdGenerator: Send + Sync {
    /// Hand out an id that has not been handed out or observed before.
    ///
    /// Fails with [`ListError::IdsExhausted`] once no larger id is left.
    fn next_id(&self) -> Result<ItemId>;

    /// Record an id that entered the list without going through `next_id`.
    fn observe(&self, id: ItemId);
}

/// Which generator a list is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    /// 1, 2, 3, ...
    #[default]
    Sequential,
    /// Milliseconds since the Unix epoch, bumped to stay strictly increasing.
    Timestamp,
}

impl IdScheme {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdScheme::Sequential => Box::new(SequentialIds::new()),
            IdScheme::Timestamp => Box::new(TimestampIds::new()),
        }
    }
}

/// Monotonic counter starting at 1. `u64::MAX` is never handed out.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Result<ItemId> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map(ItemId)
            .map_err(|_| ListError::IdsExhausted)
    }

    fn observe(&self, id: ItemId) {
        self.next.fetch_max(id.0.saturating_add(1), Ordering::SeqCst);
    }
}

/// Wall-clock ids. Two calls in the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicU64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl IdGenerator for TimestampIds {
    fn next_id(&self) -> Result<ItemId> {
        let now = now_millis();
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = last
                .checked_add(1)
                .map(|after| now.max(after))
                .ok_or(ListError::IdsExhausted)?;
            match self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return Ok(ItemId(candidate)),
                Err(current) => last = current,
            }
        }
    }

    fn observe(&self, id: ItemId) {
        self.last.fetch_max(id.0, Ordering::SeqCst);
    }
}
