//! Error types for catalog loading

use thiserror::Error;

/// Errors raised while loading, mapping or persisting catalog data
///
/// Parsing itself never fails; errors come from I/O and from the
/// header checks done by the mapper and the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Source file could not be opened or read
    #[error("Read error: {0}")]
    ReadError(String),

    /// Output file could not be created or written
    #[error("Write error: {0}")]
    WriteError(String),

    /// Document has no header row
    #[error("Document has no header row")]
    MissingHeader,

    /// Required header column is absent
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, CatalogError>;
