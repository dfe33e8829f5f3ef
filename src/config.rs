use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{seed_products, Catalog, Product};
use crate::error::CatalogError;

/// Storefront settings and the product list it sells.
///
/// Every field is optional in JSON; missing ones fall back to the built-in
/// shop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub store_name: String,
    pub currency_symbol: String,
    /// How many catalog products the home page shows.
    pub featured_count: usize,
    pub products: Vec<Product>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            store_name: "Санти Хобби".to_string(),
            currency_symbol: "₽".to_string(),
            featured_count: 6,
            products: seed_products(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: StorefrontConfig = serde_json::from_str(json).map_err(|err| {
            warn!(error = %err, "rejected storefront configuration");
            CatalogError::from(err)
        })?;
        debug!(products = config.products.len(), "loaded storefront configuration");
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| {
            warn!(path = %path.display(), error = %err, "cannot read storefront configuration");
            CatalogError::from(err)
        })?;
        Self::from_json(&json)
    }

    /// Build the catalog, rejecting duplicate product ids.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.products.clone())
    }
}
