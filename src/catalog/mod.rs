mod catalog;
mod category;
mod filter;
mod product;

pub use catalog::{seed_products, Catalog};
pub use category::{Category, CategorySelection, ALL_CATEGORIES_LABEL};
pub use filter::filter_products;
pub use product::{Product, ProductId, PLACEHOLDER_IMAGE};
