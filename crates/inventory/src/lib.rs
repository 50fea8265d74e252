//! Inventory domain module.
//!
//! This crate contains the in-memory record store and the rules around it,
//! implemented purely as deterministic logic (no IO, no terminal handling).

pub mod record;
pub mod shared;
pub mod sorter;
pub mod store;
pub mod validator;

pub use record::{Category, ItemId, Price, Record};
pub use shared::SharedStore;
pub use sorter::{SortKey, SortOrder, sort_snapshot};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, FieldUpdate, Store};
pub use validator::{
    MAX_PRICE_WHOLE_DIGITS, validate_category, validate_id, validate_price, validate_quantity,
};
