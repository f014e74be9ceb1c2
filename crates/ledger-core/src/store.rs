//! Item Store
//!
//! Ordered in-memory collection of items, newest first. Mutation happens only
//! through `add` and `delete`.

use crate::item::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from items already in display order
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Prepend an item so it shows first
    pub fn add(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    /// Remove the item with `id`. Absent ids are ignored.
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: ItemId) -> Item {
        Item::new(id, format!("Item {}", id), format!("CODE{}", id), "1/1/2025, 00.00.00")
    }

    #[test]
    fn test_add_prepends() {
        let mut store = ItemStore::new();
        for id in 1..=4 {
            store.add(make_item(id));
        }

        let ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_delete_removes_only_match() {
        let mut store = ItemStore::new();
        store.add(make_item(1));
        store.add(make_item(2));
        store.add(make_item(3));

        let removed = store.delete(2).expect("item 2 should exist");
        assert_eq!(removed.id, 2);
        assert_eq!(store.len(), 2);
        assert!(!store.contains(2));
        assert!(store.contains(1) && store.contains(3));
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = ItemStore::new();
        store.add(make_item(1));

        assert!(store.delete(99).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_twice() {
        let mut store = ItemStore::new();
        store.add(make_item(7));

        assert!(store.delete(7).is_some());
        assert!(store.delete(7).is_none());
        assert!(store.is_empty());
    }
}
