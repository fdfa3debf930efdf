//! Authoritative collection of items.
//!
//! `ItemStore` only offers lookup and mutation primitives. Callers check
//! uniqueness before [`insert`](ItemStore::insert) and existence before
//! [`remove_at`](ItemStore::remove_at); the store does not re-check. It is not
//! synchronized either: shared use goes through a lock held across the whole
//! check-then-mutate sequence (see `InMemoryItemRepository`).

use crate::models::Item;

#[derive(Debug, Default, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `items`, in order.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Exact, case-sensitive match on `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Position of the item called `name`, for [`remove_at`](Self::remove_at).
    pub fn find_index_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn insert(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove and return the item at `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Item {
        self.items.remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
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

    fn seeded() -> ItemStore {
        ItemStore::with_items(vec![
            Item::new("giant hershey bar", 2.49),
            Item::new("milk", 3.99),
        ])
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let store = seeded();
        assert_eq!(store.find_by_name("milk"), Some(&Item::new("milk", 3.99)));
        assert!(store.find_by_name("Milk").is_none());
        assert!(store.find_by_name("mil").is_none());
        assert!(store.find_by_name(" milk").is_none());
    }

    #[test]
    fn test_find_index_by_name() {
        let store = seeded();
        assert_eq!(store.find_index_by_name("giant hershey bar"), Some(0));
        assert_eq!(store.find_index_by_name("milk"), Some(1));
        assert_eq!(store.find_index_by_name("skittles"), None);
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut store = ItemStore::new();
        assert!(store.is_empty());

        store.insert(Item::new("a", 1.0));
        store.insert(Item::new("b", 2.0));

        let names: Vec<_> = store.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_remove_at_removes_exactly_one() {
        let mut store = seeded();
        let removed = store.remove_at(0);

        assert_eq!(removed.name, "giant hershey bar");
        assert_eq!(store.len(), 1);
        assert!(store.find_by_name("giant hershey bar").is_none());
    }

    #[test]
    fn test_find_by_name_mut_edits_in_place() {
        let mut store = seeded();
        store.find_by_name_mut("milk").unwrap().price = 4.25;
        assert_eq!(store.find_by_name("milk").unwrap().price, 4.25);
    }

    #[test]
    fn test_clear() {
        let mut store = seeded();
        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }
}
