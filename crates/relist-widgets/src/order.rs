#![forbid(unsafe_code)]

//! Committed-order snapshots.
//!
//! A [`ListOrder`] is what a host ships to a backend after a drop or a
//! delete, and what it feeds back through
//! [`SortableList::restore_order`](crate::sortable_list::SortableList::restore_order)
//! on the next session. With the `state-persistence` feature it derives
//! `serde` traits.

use crate::item::ItemId;

/// Item ids in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ListOrder {
    ids: Vec<ItemId>,
}

impl ListOrder {
    #[must_use]
    pub fn new(ids: Vec<ItemId>) -> Self {
        Self { ids }
    }

    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Index of `id`, if present.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }
}

impl From<Vec<ItemId>> for ListOrder {
    fn from(ids: Vec<ItemId>) -> Self {
        Self::new(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_lookup() {
        let order = ListOrder::new(vec![ItemId::new(4), ItemId::new(2)]);
        assert_eq!(order.position(ItemId::new(2)), Some(1));
        assert_eq!(order.position(ItemId::new(9)), None);
        assert_eq!(order.len(), 2);
        assert!(ListOrder::default().is_empty());
    }
}
