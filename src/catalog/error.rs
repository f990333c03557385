use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No record matches the requested id. Malformed ids land here too.
    #[error("Event '{0}' was not found")]
    NotFound(String),

    #[error("Invalid event: {0}")]
    Validation(String),

    #[error("Catalog state is unavailable")]
    Poisoned,
}

pub type CatalogResult<T> = Result<T, CatalogError>;
