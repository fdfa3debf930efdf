//! # Axum Helpers
//!
//! Shared building blocks for the workspace's Axum services.
//!
//! - **[`server`]**: router assembly, `/health`, graceful shutdown
//! - **[`errors`]**: `AppError` and the `{"error": "..."}` response body
//! - **[`extractors`]**: `AppJson` and `AppPath`, extractors with JSON rejections

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{AppJson, AppPath};
pub use server::{create_production_app, create_router, health_router};
