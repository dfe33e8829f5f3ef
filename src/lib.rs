// Lets the proc-macros refer to `::hobby_storefront` from inside this crate.
extern crate self as hobby_storefront;

mod aggregate;
mod cart;
mod catalog;
mod config;
mod entity;
mod error;
mod storefront;
mod view;

pub use aggregate::{hydrate, Aggregate};
pub use cart::{Cart, CartItem, CartSnapshot};
pub use catalog::{
    filter_products, seed_products, Catalog, Category, CategorySelection, Product, ProductId,
    ALL_CATEGORIES_LABEL, PLACEHOLDER_IMAGE,
};
pub use config::StorefrontConfig;
pub use entity::{Entity, EventRecord, PayloadError};
pub use error::{CatalogError, StorefrontError};
pub use storefront::{ChangeKind, ChangeNotifier, Section, StoreChange, Storefront};
pub use view::{
    CartLine, CartPanel, CategoryButton, NavTab, ProductCard, Render, SectionBody, StorefrontView,
    TextRenderer,
};

pub use hobby_storefront_macros::{aggregate, digest};
