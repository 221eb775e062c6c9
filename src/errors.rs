// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, catalog).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Database Error: {0}")]
    DbError(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::Catalog(CatalogError::Unavailable(_)) => 503,
            ServerError::Catalog(_) | ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}

/// Failures a catalog supplier or detail lookup can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
    #[error("Duplicate property id `{0}`")]
    DuplicateId(String),
    #[error("Property `{id}` has an invalid {field}")]
    InvalidField { id: String, field: &'static str },
}

impl From<rusqlite::Error> for CatalogError {
    fn from(e: rusqlite::Error) -> Self {
        CatalogError::Unavailable(e.to_string())
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
