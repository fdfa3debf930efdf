//! Shared application state passed to route builders.

use domain_items::InMemoryItemRepository;
use tracing::info;

use crate::config::Config;

/// Cloned into each router; the repository shares one store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// The process-wide item catalog, empty at startup
    pub items: InMemoryItemRepository,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            items: InMemoryItemRepository::new(),
        }
    }

    /// Cleanup handed to the server; runs once shutdown has been signalled.
    pub fn shutdown_cleanup(&self) -> impl Future<Output = ()> + Send + 'static {
        let items = self.items.clone();
        async move {
            let remaining = items.len().await;
            info!(remaining_items = remaining, "Dropping in-memory catalog");
        }
    }
}
