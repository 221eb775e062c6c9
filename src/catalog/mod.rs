//! Where listings come from.
//!
//! The views never own property data. They get a snapshot from a
//! [`CatalogSupplier`] (through the [`CatalogSlot`], which may still be
//! loading) and single records from a [`DetailLookup`].

pub mod slot;
pub mod sqlite;

pub use slot::{CatalogSlot, CatalogState};
pub use sqlite::SqliteCatalog;

use crate::domain::property::{Catalog, PropertyDetail};
use crate::errors::CatalogError;

/// Delivers an ordered catalog snapshot. Called once per load, off the
/// request path.
pub trait CatalogSupplier: Send + Sync {
    fn fetch_catalog(&self) -> Result<Catalog, CatalogError>;
}

/// Resolves a property id to its detail, `Ok(None)` when there is no such id.
pub trait DetailLookup: Send + Sync {
    fn find_detail(&self, id: &str) -> Result<Option<PropertyDetail>, CatalogError>;
}
