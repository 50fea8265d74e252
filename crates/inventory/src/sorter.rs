//! Stable ordering over a store snapshot.

use core::cmp::Ordering;

use crate::record::Record;

/// Field a snapshot is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Quantity,
}

impl SortKey {
    fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Price => a.price().cmp(&b.price()),
            SortKey::Quantity => a.quantity().cmp(&b.quantity()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Order an owned snapshot by `key`.
///
/// `sort_by` is a stable merge sort, so records with equal keys keep their snapshot
/// order in both directions. The store itself is never touched.
pub fn sort_snapshot(mut items: Vec<Record>, key: SortKey, order: SortOrder) -> Vec<Record> {
    items.sort_by(|a, b| match order {
        SortOrder::Ascending => key.compare(a, b),
        SortOrder::Descending => key.compare(b, a),
    });
    items
}
