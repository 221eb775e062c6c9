// src/tests/utils.rs
use crate::catalog::{CatalogSlot, CatalogSupplier, DetailLookup};
use crate::db::Database;
use crate::domain::property::PropertyDetail;
use crate::errors::CatalogError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::fixtures::FixtureCatalog;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// App state with the fixture catalog already loaded.
pub fn ready_state() -> AppState {
    let source = Arc::new(FixtureCatalog::new());
    let catalog = source.fetch_catalog().expect("fixtures are valid");
    AppState::new(CatalogSlot::ready(catalog), source)
}

/// Ready app state over the given listings only.
pub fn state_with(details: Vec<PropertyDetail>) -> AppState {
    let source = Arc::new(FixtureCatalog::from_details(details));
    let catalog = source.fetch_catalog().expect("fixtures are valid");
    AppState::new(CatalogSlot::ready(catalog), source)
}

/// App state whose catalog has not arrived yet.
pub fn loading_state() -> AppState {
    AppState::new(CatalogSlot::new(), Arc::new(FixtureCatalog::new()))
}

pub fn unavailable_state() -> AppState {
    let slot = CatalogSlot::new();
    slot.publish(Err(CatalogError::Unavailable("disk full".into())));
    AppState::new(slot, Arc::new(FixtureCatalog::new()))
}

pub fn with_lookup(lookup: Arc<dyn DetailLookup>) -> AppState {
    AppState {
        details: lookup,
        ..ready_state()
    }
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get(state: &AppState, uri: &str) -> Response {
    handle(request(Method::GET, uri), state).expect("route should respond")
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

/// Number of rendered property cards.
pub fn card_count(html: &str) -> usize {
    html.matches("class=\"property-card\"").count()
}

/// SQLite file in the temp dir, deleted when dropped.
pub struct TempDb {
    db: Database,
    path: PathBuf,
}

impl TempDb {
    pub fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "blockestate_{tag}_{}_{nanos}.sqlite",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Self {
            db: Database::new(path.to_string_lossy().into_owned()),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Deref for TempDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        let _ = std::fs::remove_file(self.path.with_extension("sqlite-journal"));
    }
}
