//! Identity of stored records.

/// Something the store keys by identity rather than by value.
///
/// Two records with the same id are the same inventory entry even when their
/// quantity or price differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Same entry, whatever the current field values.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
