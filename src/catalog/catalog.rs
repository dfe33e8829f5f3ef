use std::collections::HashMap;

use super::{filter_products, Category, CategorySelection, Product, ProductId};
use crate::error::CatalogError;

const SEED: [(u32, &str, u64, Category); 9] = [
    (1, "Набор акриловых красок", 1299, Category::Drawing),
    (2, "Холст 30×40 см", 450, Category::Drawing),
    (3, "Набор кистей 12 шт", 890, Category::Drawing),
    (4, "Пряжа мериносовая", 350, Category::Needlework),
    (5, "Крючки для вязания", 280, Category::Needlework),
    (6, "Набор для вышивания", 1590, Category::Needlework),
    (7, "Сборная модель танка", 2100, Category::Modelling),
    (8, "Клей для моделей", 220, Category::Modelling),
    (9, "Декоративная бумага А4", 320, Category::Scrapbooking),
];

/// The shop's built-in product list.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, name, price, category)| Product::new(id, name, price, category))
        .collect()
}

/// Immutable, ordered collection of every sellable product.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    positions: HashMap<ProductId, usize>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::seed()
    }
}

impl Catalog {
    /// Build a catalog, keeping the given order. Product ids must be unique.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if positions.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }
        Ok(Catalog { products, positions })
    }

    pub fn seed() -> Self {
        let products = seed_products();
        let positions = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id, position))
            .collect();
        Catalog { products, positions }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.positions.get(&id).map(|&position| &self.products[position])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn filter(&self, selection: &CategorySelection) -> Vec<&Product> {
        filter_products(&self.products, selection)
    }

    /// The first `count` products, as shown on the home page.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }
}
