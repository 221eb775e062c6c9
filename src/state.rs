// src/state.rs
use crate::catalog::{CatalogSlot, DetailLookup};
use std::sync::Arc;

/// Shared by every request worker. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogSlot,
    pub details: Arc<dyn DetailLookup>,
}

impl AppState {
    pub fn new(catalog: CatalogSlot, details: Arc<dyn DetailLookup>) -> Self {
        Self { catalog, details }
    }
}
