//! `stockroom-core` — shared building blocks.
//!
//! This crate contains the error vocabulary and the `Entity` trait used by the
//! inventory crate (no IO, no terminal concerns).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
