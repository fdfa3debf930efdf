//! Items Domain
//!
//! A catalog of named, priced items held in memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/items, /items/{name})
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation order, error messages, name normalization
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory implementation (locking)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Lookup and mutation primitives over Vec<Item>
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_items::{InMemoryItemRepository, ItemService, handlers};
//!
//! let repository = InMemoryItemRepository::new();
//! let service = ItemService::new(repository);
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{ItemError, ItemErrorKind, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemChanges, PriceInput, UpdateItem};
pub use normalize::clean_name;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
pub use store::ItemStore;
