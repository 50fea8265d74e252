//! Thread-safe handle around a [`Store`].
//!
//! The console drives a plain `Store`; this handle is for embedders that expose the
//! store across threads. Mutations take the write lock, so they are serialized per
//! store; queries share the read lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::InventoryResult;

use crate::record::{Category, ItemId, Price, Record};
use crate::sorter::{SortKey, SortOrder, sort_snapshot};
use crate::store::{FieldUpdate, Store};

#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // Store mutations are single assignments or Vec ops, so a poisoned store is
    // still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(
        &self,
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        price: Price,
        category: Category,
    ) -> InventoryResult<Record> {
        self.write()
            .create(id, name, quantity, price, category)
            .cloned()
    }

    pub fn find_by_id(&self, id: &ItemId) -> InventoryResult<Record> {
        self.read().find_by_id(id).cloned()
    }

    pub fn update(&self, id: &ItemId, change: FieldUpdate) -> InventoryResult<Record> {
        self.write().update(id, change).cloned()
    }

    pub fn remove(&self, id: &ItemId) -> InventoryResult<Record> {
        self.write().remove(id)
    }

    pub fn filter_by_category(&self, category: Category) -> Vec<Record> {
        self.read()
            .filter_by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn filter_low_stock(&self, threshold: u32) -> Vec<Record> {
        self.read()
            .filter_low_stock(threshold)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Copies the contents under the read lock, then sorts without holding it.
    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Vec<Record> {
        let snapshot = self.read().snapshot();
        sort_snapshot(snapshot, key, order)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_the_same_store() {
        let shared = SharedStore::default();
        let other = shared.clone();

        shared
            .create(ItemId::new("a1"), "Shirt", 10, Price::from_cents(1999), Category::Clothing)
            .unwrap();

        assert_eq!(other.len(), 1);
        assert_eq!(other.find_by_id(&ItemId::new("A1")).unwrap().name(), "Shirt");
    }

    #[test]
    fn concurrent_creates_keep_ids_unique() {
        let shared = SharedStore::default();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        // Every thread races on the same 25 ids.
                        let _ = store.create(
                            ItemId::new(format!("X{i}")),
                            format!("thread {t}"),
                            1,
                            Price::from_cents(100),
                            Category::Electronics,
                        );
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.len(), 25);
    }

    #[test]
    fn queries_return_owned_copies() {
        let shared = SharedStore::new(Store::new());
        shared
            .create(ItemId::new("B1"), "Radio", 4, Price::from_cents(2500), Category::Electronics)
            .unwrap();
        shared
            .create(ItemId::new("B2"), "Novel", 9, Price::from_cents(1200), Category::Entertainment)
            .unwrap();

        let low = shared.filter_low_stock(5);
        shared.remove(&ItemId::new("B1")).unwrap();

        assert_eq!(low.len(), 1);
        assert_eq!(low[0].item_id().as_str(), "B1");
        assert!(shared.filter_by_category(Category::Electronics).is_empty());

        let sorted = shared.sorted(SortKey::Price, SortOrder::Ascending);
        assert_eq!(sorted.len(), 1);
        assert!(shared.update(&ItemId::new("B1"), FieldUpdate::Quantity(3)).is_err());
    }
}
