use serde::Serialize;

use crate::cart::CartItem;
use crate::catalog::{CategorySelection, Product, ProductId};
use crate::storefront::{Section, Storefront};

/// Everything the page shows, derived from a `Storefront` in one pass.
///
/// Nothing here is cached between renders: build a new view after every
/// change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StorefrontView {
    pub store_name: String,
    pub currency_symbol: String,
    pub nav: Vec<NavTab>,
    /// Item count on the cart button; hidden while the cart is empty.
    pub cart_badge: Option<u64>,
    pub body: SectionBody,
    pub cart: CartPanel,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavTab {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SectionBody {
    Home {
        headline: &'static str,
        featured: Vec<ProductCard>,
    },
    Catalog {
        title: &'static str,
        categories: Vec<CategoryButton>,
        products: Vec<ProductCard>,
    },
    /// About, delivery and contacts: static pages reduced to their heading.
    Info { title: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub selection: CategorySelection,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub category: &'static str,
    pub price: u64,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        ProductCard {
            id: product.id,
            name: product.name.clone(),
            category: product.category.label(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartPanel {
    pub lines: Vec<CartLine>,
    pub total_amount: u64,
    pub checkout_available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        CartLine {
            id: item.id(),
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

impl StorefrontView {
    pub fn from_storefront(storefront: &Storefront) -> Self {
        let active = storefront.section();
        let nav = Section::ALL
            .into_iter()
            .map(|section| NavTab {
                section,
                label: section.label(),
                active: section == active,
            })
            .collect();

        let body = match active {
            Section::Home => SectionBody::Home {
                headline: Section::Home.title(),
                featured: storefront.featured_products().iter().map(ProductCard::from).collect(),
            },
            Section::Catalog => SectionBody::Catalog {
                title: Section::Catalog.title(),
                categories: CategorySelection::choices()
                    .into_iter()
                    .map(|selection| CategoryButton {
                        label: selection.label().to_string(),
                        active: &selection == storefront.selection(),
                        selection,
                    })
                    .collect(),
                products: storefront
                    .visible_products()
                    .into_iter()
                    .map(ProductCard::from)
                    .collect(),
            },
            other => SectionBody::Info { title: other.title() },
        };

        let cart = storefront.cart();
        let count = cart.total_item_count();

        StorefrontView {
            store_name: storefront.store_name().to_string(),
            currency_symbol: storefront.currency_symbol().to_string(),
            nav,
            cart_badge: (count > 0).then_some(count),
            body,
            cart: CartPanel {
                lines: cart.items().map(CartLine::from).collect(),
                total_amount: cart.total_amount(),
                checkout_available: !cart.is_empty(),
            },
        }
    }
}
