use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use tracing::info;

use crate::errors::ServerError;

// Thread-local connection slot, remembered together with the path it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = const { RefCell::new(None) };
}

#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Open or fetch the per-thread SQLite connection and run `f(conn)`.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();

                let stale = match slot.as_ref() {
                    Some((path, _)) => path != &self.path,
                    None => true,
                };
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }

                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

/// Apply a SQL file (schema or seed) to the database.
pub fn run_sql_file(db: &Database, sql_path: &str) -> Result<(), ServerError> {
    let sql = fs::read_to_string(sql_path)
        .map_err(|e| ServerError::DbError(format!("Failed to read {sql_path}: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&sql)
            .map_err(|e| ServerError::DbError(format!("Failed to apply {sql_path}: {e}")))
    })
}

/// Initialize the database from the schema file, then seed it if a seed file is given.
pub fn init_db(
    db: &Database,
    schema_path: &str,
    seed_path: Option<&str>,
) -> Result<(), ServerError> {
    run_sql_file(db, schema_path)?;
    info!(db = db.path(), schema = schema_path, "database schema applied");

    if let Some(seed) = seed_path {
        run_sql_file(db, seed)?;
        info!(db = db.path(), seed, "database seeded");
    }
    Ok(())
}
