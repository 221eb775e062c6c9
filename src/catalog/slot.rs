// src/catalog/slot.rs
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{info, warn};

use crate::catalog::CatalogSupplier;
use crate::domain::property::Catalog;
use crate::errors::CatalogError;

/// What the views can see of the catalog right now.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loading,
    Ready(Arc<Catalog>),
    Unavailable(String),
}

/// Shared holder for the catalog snapshot. Written once by the loader,
/// read by every request worker.
#[derive(Debug, Clone)]
pub struct CatalogSlot {
    inner: Arc<RwLock<CatalogState>>,
}

impl Default for CatalogSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSlot {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogState::Loading)),
        }
    }

    /// A slot that is already loaded.
    pub fn ready(catalog: Catalog) -> Self {
        let slot = Self::new();
        slot.publish(Ok(catalog));
        slot
    }

    pub fn snapshot(&self) -> CatalogState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn publish(&self, result: Result<Catalog, CatalogError>) {
        let next = match result {
            Ok(catalog) => CatalogState::Ready(Arc::new(catalog)),
            Err(e) => CatalogState::Unavailable(e.to_string()),
        };
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Fetch the catalog on a background thread and publish the outcome.
    pub fn spawn_load(
        &self,
        supplier: Arc<dyn CatalogSupplier>,
    ) -> std::io::Result<JoinHandle<()>> {
        let slot = self.clone();
        thread::Builder::new()
            .name("catalog-loader".into())
            .spawn(move || {
                let started = Instant::now();
                let result = supplier.fetch_catalog();
                match &result {
                    Ok(catalog) => info!(
                        properties = catalog.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "catalog loaded"
                    ),
                    Err(e) => warn!(error = %e, "catalog unavailable"),
                }
                slot.publish(result);
            })
    }
}
