use std::fmt;

use crate::catalog::ProductId;

/// Failures while building a catalog from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateProduct(ProductId),
    Parse(String),
    Io(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateProduct(id) => {
                write!(f, "product id {} appears more than once in the catalog", id)
            }
            CatalogError::Parse(message) => write!(f, "invalid catalog configuration: {}", message),
            CatalogError::Io(message) => write!(f, "failed to read catalog configuration: {}", message),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    UnknownProduct(ProductId),
    Catalog(CatalogError),
    Replay(String),
}

impl fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorefrontError::UnknownProduct(id) => write!(f, "no product with id {} in the catalog", id),
            StorefrontError::Catalog(err) => write!(f, "catalog error: {}", err),
            StorefrontError::Replay(message) => write!(f, "replay error: {}", message),
        }
    }
}

impl std::error::Error for StorefrontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorefrontError::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogError> for StorefrontError {
    fn from(err: CatalogError) -> Self {
        StorefrontError::Catalog(err)
    }
}
