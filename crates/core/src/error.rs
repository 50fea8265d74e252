//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is recoverable: callers are expected to surface it to the user and
/// let them retry, never to abort the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A supplied value failed validation.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// A record with this id already exists.
    #[error("an item with ID '{0}' already exists in the inventory")]
    DuplicateId(String),

    /// No record with this id exists.
    #[error("item with ID {0} not found")]
    NotFound(String),
}

impl InventoryError {
    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::InvalidField(msg.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// True for outcomes that mean "the id was not there".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
