// src/catalog/sqlite.rs
use crate::catalog::{CatalogSupplier, DetailLookup};
use crate::db::connection::Database;
use crate::db::properties::{find_property_detail, load_all_properties};
use crate::domain::property::{Catalog, PropertyDetail};
use crate::errors::{CatalogError, ServerError};

/// Catalog and detail lookups backed by the `properties` tables.
#[derive(Clone, Debug)]
pub struct SqliteCatalog {
    db: Database,
}

impl SqliteCatalog {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn into_catalog_error(err: ServerError) -> CatalogError {
    match err {
        ServerError::Catalog(e) => e,
        other => CatalogError::Unavailable(other.to_string()),
    }
}

impl CatalogSupplier for SqliteCatalog {
    fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        let properties = self
            .db
            .with_conn(|conn| load_all_properties(conn))
            .map_err(into_catalog_error)?;
        Catalog::new(properties)
    }
}

impl DetailLookup for SqliteCatalog {
    fn find_detail(&self, id: &str) -> Result<Option<PropertyDetail>, CatalogError> {
        self.db
            .with_conn(|conn| find_property_detail(conn, id))
            .map_err(into_catalog_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::init_db;
    use crate::tests::utils::TempDb;

    #[test]
    fn missing_tables_are_unavailable() {
        let db = TempDb::new("empty");
        let catalog = SqliteCatalog::new(Database::clone(&db));
        assert!(matches!(
            catalog.fetch_catalog(),
            Err(CatalogError::Unavailable(_))
        ));
    }

    #[test]
    fn schema_without_seed_is_an_empty_catalog() {
        let db = TempDb::new("unseeded");
        init_db(&db, "sql/schema.sql", None).unwrap();

        let catalog = SqliteCatalog::new(Database::clone(&db));
        assert!(catalog.fetch_catalog().unwrap().is_empty());
        assert_eq!(catalog.find_detail("1").unwrap(), None);
    }
}
