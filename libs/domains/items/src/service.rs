//! Item Service - validation and business rules for the catalog

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemChanges, PriceInput, UpdateItem};
use crate::normalize::clean_name;
use crate::repository::ItemRepository;

/// Item service providing the CRUD operations behind the HTTP handlers.
///
/// Each operation validates in a fixed order and stops at the first failure,
/// so a request reports exactly one error.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

/// Trimmed body name, or `None` when absent or blank.
fn supplied_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Body price, or `None` when absent or blank.
fn supplied_price(price: Option<PriceInput>) -> Option<PriceInput> {
    price.filter(|p| !p.is_blank())
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every item in the catalog
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Create a new item.
    ///
    /// Checks, in order: missing fields, duplicate name, numeric price.
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let CreateItem { name, price } = input;

        let (name, price) = match (supplied_name(name), supplied_price(price)) {
            (None, None) => return Err(ItemError::MissingNameAndPrice),
            (None, Some(_)) => return Err(ItemError::MissingName),
            (Some(_), None) => return Err(ItemError::MissingPrice),
            (Some(name), Some(price)) => (name, price),
        };

        let existing = self.repository.get_by_name(&name).await?;
        if let Some(existing) = existing {
            return Err(ItemError::DuplicateName {
                name,
                price: existing.price,
            });
        }

        let price = price
            .coerce()
            .ok_or_else(|| ItemError::InvalidNumber(price.to_string()).not_added(&name))?;

        self.repository.create(Item::new(name, price)).await
    }

    /// Get an item by its path-supplied name
    #[instrument(skip(self))]
    pub async fn get_item(&self, raw_name: &str) -> ItemResult<Item> {
        let name = clean_name(raw_name);

        let item = self.repository.get_by_name(&name).await?;
        item.ok_or(ItemError::NotFound(name))
    }

    /// Change the name and/or price of an item.
    ///
    /// All fields are validated before anything is written: a rejected price
    /// never leaves a rename behind.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, raw_name: &str, input: UpdateItem) -> ItemResult<Item> {
        let name = clean_name(raw_name);

        let existing = self
            .repository
            .get_by_name(&name)
            .await?
            .ok_or_else(|| ItemError::NotFound(name.clone()).unchanged(&name))?;

        let new_name = supplied_name(input.name);
        let new_price = supplied_price(input.price);

        if new_name.is_none() && new_price.is_none() {
            return Err(ItemError::NoOpUpdate.unchanged(&name));
        }

        if let Some(ref target) = new_name {
            if *target != existing.name && self.repository.get_by_name(target).await?.is_some() {
                return Err(ItemError::NameCollision {
                    from: name.clone(),
                    to: target.clone(),
                }
                .unchanged(&name));
            }
        }

        let price = match new_price {
            Some(price) => Some(
                price
                    .coerce()
                    .ok_or_else(|| ItemError::InvalidNumber(price.to_string()).unchanged(&name))?,
            ),
            None => None,
        };

        let changes = ItemChanges {
            name: new_name,
            price,
        };

        self.repository
            .update(&name, changes)
            .await
            .map_err(|e| e.unchanged(&name))
    }

    /// Delete an item by its path-supplied name
    #[instrument(skip(self))]
    pub async fn delete_item(&self, raw_name: &str) -> ItemResult<()> {
        let name = clean_name(raw_name);
        self.repository.delete(&name).await?;
        Ok(())
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
