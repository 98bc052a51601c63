//! Error types for the packing list.

use crate::types::ItemId;
use thiserror::Error;

/// Main error type for list operations.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Item rejected: empty description")]
    EmptyDescription,

    #[error("Item rejected: quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("Item rejected: id {0} is already in the list")]
    DuplicateId(ItemId),

    #[error("Quantity is not a number: {0:?}")]
    QuantityNotANumber(String),

    #[error("No item ids left to hand out")]
    IdsExhausted,

    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for ListError {
    fn from(e: serde_json::Error) -> Self {
        ListError::Deserialization(e.to_string())
    }
}

impl ListError {
    /// True for errors raised when an item fails validation.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ListError::EmptyDescription | ListError::InvalidQuantity(_) | ListError::DuplicateId(_)
        )
    }
}

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;
