use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemChanges};
use crate::store::ItemStore;

/// Repository trait for Item persistence
///
/// Names passed in are already normalized. Mutating methods are the
/// authority on uniqueness and existence: each one checks and writes as a
/// single step, whatever the caller checked beforehand.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by exact name
    async fn get_by_name(&self, name: &str) -> ItemResult<Option<Item>>;

    /// Insert a new item.
    ///
    /// Fails with [`ItemError::DuplicateName`] if the name is taken.
    async fn create(&self, item: Item) -> ItemResult<Item>;

    /// Apply `changes` to the item called `name` and return the result.
    ///
    /// Fails with [`ItemError::NotFound`] or [`ItemError::NameCollision`];
    /// on failure nothing is written.
    async fn update(&self, name: &str, changes: ItemChanges) -> ItemResult<Item>;

    /// Remove the item called `name` and return it.
    async fn delete(&self, name: &str) -> ItemResult<Item>;
}

/// In-memory implementation of ItemRepository
///
/// Clones share the same store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<ItemStore>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with fixture items.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ItemStore::with_items(items))),
        }
    }

    /// Drop every item. Used to reset fixtures between tests.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.list().to_vec())
    }

    async fn get_by_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.find_by_name(name).cloned())
    }

    #[instrument(skip(self, item), fields(item_name = %item.name))]
    async fn create(&self, item: Item) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        if let Some(existing) = store.find_by_name(&item.name) {
            return Err(ItemError::DuplicateName {
                name: item.name,
                price: existing.price,
            });
        }

        store.insert(item.clone());

        tracing::info!(price = item.price, "Item created");
        Ok(item)
    }

    #[instrument(skip(self, changes), fields(item_name = %name))]
    async fn update(&self, name: &str, changes: ItemChanges) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        if store.find_index_by_name(name).is_none() {
            return Err(ItemError::NotFound(name.to_string()));
        }

        if let Some(ref new_name) = changes.name {
            if new_name != name && store.find_by_name(new_name).is_some() {
                return Err(ItemError::NameCollision {
                    from: name.to_string(),
                    to: new_name.clone(),
                });
            }
        }

        let item = store
            .find_by_name_mut(name)
            .ok_or_else(|| ItemError::NotFound(name.to_string()))?;

        if let Some(new_name) = changes.name {
            item.name = new_name;
        }
        if let Some(price) = changes.price {
            item.price = price;
        }
        let updated = item.clone();

        tracing::info!(new_name = %updated.name, price = updated.price, "Item updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(item_name = %name))]
    async fn delete(&self, name: &str) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let index = store
            .find_index_by_name(name)
            .ok_or_else(|| ItemError::NotFound(name.to_string()))?;
        let removed = store.remove_at(index);

        tracing::info!("Item deleted");
        Ok(removed)
    }
}
