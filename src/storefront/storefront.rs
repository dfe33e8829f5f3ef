use tracing::{debug, warn};

use super::{ChangeKind, ChangeNotifier, Section, StoreChange};
use crate::cart::Cart;
use crate::catalog::{Catalog, CategorySelection, Product, ProductId};
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;

/// The page state: catalog, cart, category filter and active tab.
///
/// All mutations go through these methods; each one that changes something
/// notifies the registered listeners once.
#[derive(Debug)]
pub struct Storefront {
    store_name: String,
    currency_symbol: String,
    featured_count: usize,
    catalog: Catalog,
    cart: Cart,
    selection: CategorySelection,
    section: Section,
    notifier: ChangeNotifier,
}

impl Default for Storefront {
    fn default() -> Self {
        let config = StorefrontConfig::default();
        Storefront::with_catalog(&config, Catalog::seed())
    }
}

impl Storefront {
    pub fn new(catalog: Catalog) -> Self {
        Storefront::with_catalog(&StorefrontConfig::default(), catalog)
    }

    pub fn from_config(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = config.catalog()?;
        Ok(Storefront::with_catalog(config, catalog))
    }

    fn with_catalog(config: &StorefrontConfig, catalog: Catalog) -> Self {
        Storefront {
            store_name: config.store_name.clone(),
            currency_symbol: config.currency_symbol.clone(),
            featured_count: config.featured_count,
            catalog,
            cart: Cart::with_id("cart"),
            selection: CategorySelection::default(),
            section: Section::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn on<F>(&mut self, kind: ChangeKind, listener: F)
    where
        F: Fn(&StoreChange) + 'static,
    {
        self.notifier.on(kind, listener);
    }

    pub fn on_any<F>(&mut self, listener: F)
    where
        F: Fn(&StoreChange) + 'static,
    {
        self.notifier.on_any(listener);
    }

    pub fn select_category(&mut self, selection: impl Into<CategorySelection>) {
        let selection = selection.into();
        if selection == self.selection {
            return;
        }
        debug!(category = %selection, "category selected");
        self.selection = selection.clone();
        self.notifier.emit(&StoreChange::CategorySelected(selection));
    }

    pub fn switch_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        debug!(?section, "section switched");
        self.section = section;
        self.notifier.emit(&StoreChange::SectionChanged(section));
    }

    /// The home page's "go to catalog" button.
    pub fn open_catalog(&mut self) {
        self.switch_section(Section::Catalog);
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<(), StorefrontError> {
        let Some(product) = self.catalog.get(product_id) else {
            warn!(%product_id, "add to cart for a product not in the catalog");
            return Err(StorefrontError::UnknownProduct(product_id));
        };
        let product = product.clone();
        self.mutate_cart(|cart| cart.add_to_cart(&product));
        Ok(())
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.mutate_cart(|cart| cart.remove_from_cart(product_id));
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.mutate_cart(|cart| cart.update_quantity(product_id, quantity));
    }

    pub fn increment(&mut self, product_id: ProductId) {
        self.mutate_cart(|cart| cart.increment(product_id));
    }

    pub fn decrement(&mut self, product_id: ProductId) {
        self.mutate_cart(|cart| cart.decrement(product_id));
    }

    fn mutate_cart(&mut self, mutation: impl FnOnce(&mut Cart)) {
        let before = self.cart.entity.version();
        mutation(&mut self.cart);
        if self.cart.entity.version() == before {
            return;
        }
        self.notifier.emit(&StoreChange::CartChanged {
            total_item_count: self.cart.total_item_count(),
            total_amount: self.cart.total_amount(),
        });
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Catalog products passing the current category filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.selection)
    }

    pub fn featured_products(&self) -> &[Product] {
        self.catalog.featured(self.featured_count)
    }

    pub fn total_amount(&self) -> u64 {
        self.cart.total_amount()
    }

    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }
}
