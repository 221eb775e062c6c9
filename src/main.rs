use crate::catalog::{CatalogSlot, SqliteCatalog};
use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blockestate=info")),
        )
        .init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path, cfg.seed_path.as_deref()) {
        error!(error = %e, db = %cfg.db_path, "database initialization failed");
        std::process::exit(1);
    }

    // Listings load in the background; pages render a placeholder until then.
    let source = Arc::new(SqliteCatalog::new(db));
    let catalog = CatalogSlot::new();
    if let Err(e) = catalog.spawn_load(source.clone()) {
        error!(error = %e, "could not start catalog loader");
        std::process::exit(1);
    }

    let state = AppState::new(catalog, source);

    info!(addr = %cfg.addr, workers = cfg.workers, "starting server");
    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
