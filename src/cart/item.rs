use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};

/// One cart line: a product and how many of it. Quantity is at least 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub(crate) fn new(product: Product) -> Self {
        CartItem { product, quantity: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price times quantity, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}
