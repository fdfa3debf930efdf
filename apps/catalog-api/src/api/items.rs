//! Items API routes
//!
//! Wires the items domain onto the shared in-memory repository.

use axum::Router;
use domain_items::{ItemService, handlers};

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    let service = ItemService::new(state.items.clone());
    handlers::router(service)
}
