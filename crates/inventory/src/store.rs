//! In-memory record store.
//!
//! The store exclusively owns its records and keeps them in insertion order. Ids are
//! canonicalized by [`ItemId`] before they get here, so every lookup is an exact
//! byte comparison.

use tracing::{debug, warn};

use stockroom_core::{InventoryError, InventoryResult};

use crate::record::{Category, ItemId, Price, Record};
use crate::validator::{validate_id, validate_price, validate_quantity};

/// Quantity at or below which a record counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// A change to one of the mutable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Quantity(u32),
    Price(Price),
}

impl FieldUpdate {
    fn field_name(self) -> &'static str {
        match self {
            FieldUpdate::Quantity(_) => "quantity",
            FieldUpdate::Price(_) => "price",
        }
    }
}

/// Ordered collection of records with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Owned copy of the current contents, for the sorter.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.records.iter().position(|r| r.item_id() == id)
    }

    /// Validate and append a new record.
    ///
    /// A colliding id is reported as `DuplicateId` before any field is checked.
    pub fn create(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        price: Price,
        category: Category,
    ) -> InventoryResult<&Record> {
        if self.contains(&id) {
            warn!(id = %id, "rejected create: duplicate id");
            return Err(InventoryError::duplicate_id(id.as_str()));
        }
        if !validate_id(id.as_str()) {
            warn!(id = %id, "rejected create: malformed id");
            return Err(InventoryError::invalid_field(
                "id must be non-empty and alphanumeric",
            ));
        }
        if !validate_quantity(quantity) {
            warn!(id = %id, quantity, "rejected create: invalid quantity");
            return Err(InventoryError::invalid_field("quantity must be positive"));
        }
        if !validate_price(price) {
            warn!(id = %id, price = %price, "rejected create: invalid price");
            return Err(InventoryError::invalid_field(
                "price must be positive with at most 10 integer digits",
            ));
        }

        debug!(id = %id, category = %category, quantity, price = %price, "record created");
        self.records
            .push(Record::new(id, name, quantity, price, category));
        let created = self.records.len() - 1;
        Ok(&self.records[created])
    }

    /// Exact lookup on the canonical id.
    pub fn find_by_id(&self, id: &ItemId) -> InventoryResult<&Record> {
        self.records
            .iter()
            .find(|r| r.item_id() == id)
            .ok_or_else(|| InventoryError::not_found(id.as_str()))
    }

    /// Change `quantity` or `price` of an existing record in place.
    pub fn update(&mut self, id: &ItemId, change: FieldUpdate) -> InventoryResult<&Record> {
        let Some(idx) = self.position(id) else {
            warn!(id = %id, field = change.field_name(), "rejected update: not found");
            return Err(InventoryError::not_found(id.as_str()));
        };

        let record = &mut self.records[idx];
        match change {
            FieldUpdate::Quantity(quantity) => {
                if !validate_quantity(quantity) {
                    warn!(id = %id, quantity, "rejected update: invalid quantity");
                    return Err(InventoryError::invalid_field("quantity must be positive"));
                }
                record.set_quantity(quantity);
            }
            FieldUpdate::Price(price) => {
                if !validate_price(price) {
                    warn!(id = %id, price = %price, "rejected update: invalid price");
                    return Err(InventoryError::invalid_field(
                        "price must be positive with at most 10 integer digits",
                    ));
                }
                record.set_price(price);
            }
        }

        debug!(id = %id, field = change.field_name(), "record updated");
        Ok(&self.records[idx])
    }

    /// Delete a record, keeping the relative order of the rest.
    pub fn remove(&mut self, id: &ItemId) -> InventoryResult<Record> {
        let Some(idx) = self.position(id) else {
            warn!(id = %id, "rejected remove: not found");
            return Err(InventoryError::not_found(id.as_str()));
        };
        debug!(id = %id, "record removed");
        Ok(self.records.remove(idx))
    }

    /// Records in `category`, in store order. No match yields an empty vec.
    pub fn filter_by_category(&self, category: Category) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .collect()
    }

    /// Records with `quantity <= threshold`, in store order.
    pub fn filter_low_stock(&self, threshold: u32) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.quantity() <= threshold)
            .collect()
    }
}
