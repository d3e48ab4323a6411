//! Application state shared by every request handler.
//!
//! The catalog repository is created once at startup and handed to the
//! router. Handlers receive a clone of the `Arc`, so every request sees the
//! same, fully initialized store client.

use std::sync::Arc;

use smartmenu_core::storage::CatalogRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Catalog repository (DynamoDB or in-memory).
    pub catalog: Arc<dyn CatalogRepository>,
}

impl AppState {
    /// Creates a new AppState around an already constructed repository.
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }
}
