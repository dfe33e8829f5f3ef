use hobby_storefront_macros::digest;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::CartItem;
use crate::catalog::{Product, ProductId};
use crate::entity::Entity;

/// Shopping cart keyed by product id, iterated in the order items were first added.
///
/// Every effective change is journaled on `entity`; calls that leave the cart
/// as it was record nothing. Totals are computed on each read.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    pub entity: Entity,
    items: IndexMap<ProductId, CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Cart {
            entity: Entity::with_id(id),
            items: IndexMap::new(),
        }
    }

    /// Add one unit of `product`, creating its line on first add.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.apply_addition(product.clone());
        debug!(
            product_id = %product.id,
            quantity = self.quantity(product.id).unwrap_or_default(),
            "added to cart"
        );
    }

    /// Drop the line for `product_id`. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        if !self.contains(product_id) {
            trace!(%product_id, "remove ignored, not in cart");
            return;
        }
        self.apply_removal(product_id);
        debug!(%product_id, "removed from cart");
    }

    /// Set the quantity of an existing line. Zero or less removes the line;
    /// an id that is not in the cart is left alone.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if !self.contains(product_id) {
            trace!(%product_id, quantity, "quantity update ignored, not in cart");
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.apply_quantity(product_id, quantity);
        debug!(%product_id, quantity, "cart quantity set");
    }

    pub fn increment(&mut self, product_id: ProductId) {
        if let Some(quantity) = self.quantity(product_id) {
            self.update_quantity(product_id, i64::from(quantity) + 1);
        }
    }

    pub fn decrement(&mut self, product_id: ProductId) {
        if let Some(quantity) = self.quantity(product_id) {
            self.update_quantity(product_id, i64::from(quantity) - 1);
        }
    }

    #[digest("ItemAdded", when = self.quantity(product.id) != Some(u32::MAX))]
    fn apply_addition(&mut self, product: Product) {
        match self.items.get_mut(&product.id) {
            Some(item) => item.quantity += 1,
            None => {
                self.items.insert(product.id, CartItem::new(product));
            }
        }
    }

    #[digest("ItemRemoved", when = self.items.contains_key(&product_id))]
    fn apply_removal(&mut self, product_id: ProductId) {
        self.items.shift_remove(&product_id);
    }

    #[digest(
        "QuantitySet",
        when = quantity > 0 && self.quantity(product_id).is_some_and(|current| current != quantity)
    )]
    fn apply_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(item) = self.items.get_mut(&product_id) {
            item.quantity = quantity;
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.get(&product_id)
    }

    pub fn quantity(&self, product_id: ProductId) -> Option<u32> {
        self.items.get(&product_id).map(|item| item.quantity)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.contains_key(&product_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Saturates at `u64::MAX`.
    pub fn total_amount(&self) -> u64 {
        self.items
            .values()
            .fold(0, |total, item| total.saturating_add(item.line_total()))
    }

    pub fn total_item_count(&self) -> u64 {
        self.items
            .values()
            .fold(0, |count, item| count.saturating_add(u64::from(item.quantity)))
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            id: self.entity.id().to_string(),
            items: self.items.values().cloned().collect(),
            total_item_count: self.total_item_count(),
            total_amount: self.total_amount(),
        }
    }
}

hobby_storefront_macros::aggregate!(Cart, entity {
    "ItemAdded"(product) => apply_addition,
    "ItemRemoved"(product_id) => apply_removal,
    "QuantitySet"(product_id, quantity) => apply_quantity,
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total_item_count: u64,
    pub total_amount: u64,
}
