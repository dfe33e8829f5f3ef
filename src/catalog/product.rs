use std::fmt;

use serde::{Deserialize, Serialize};

use super::Category;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Stable catalog identifier of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

/// A sellable product. Prices are whole currency units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub category: Category,
    #[serde(default = "placeholder_image")]
    pub image: String,
}

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: u64, category: Category) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            category,
            image: placeholder_image(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
