//! Custom extractors for Axum handlers.

pub mod app_json;
pub mod app_path;

pub use app_json::AppJson;
pub use app_path::AppPath;
