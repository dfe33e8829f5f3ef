use std::fmt;

use serde::{Deserialize, Serialize};

use super::Product;

/// Label of the selection that disables filtering.
pub const ALL_CATEGORIES_LABEL: &str = "Все товары";

/// The closed set of product categories, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Рисование")]
    Drawing,
    #[serde(rename = "Рукоделие")]
    Needlework,
    #[serde(rename = "Моделирование")]
    Modelling,
    #[serde(rename = "Скрапбукинг")]
    Scrapbooking,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Drawing,
        Category::Needlework,
        Category::Modelling,
        Category::Scrapbooking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Drawing => "Рисование",
            Category::Needlework => "Рукоделие",
            Category::Modelling => "Моделирование",
            Category::Scrapbooking => "Скрапбукинг",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The active category filter.
///
/// `Unrecognized` keeps a label that names no category; it matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategorySelection {
    /// Parse a button label. Never fails.
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            return CategorySelection::All;
        }
        match Category::from_label(label) {
            Some(category) => CategorySelection::Only(category),
            None => CategorySelection::Unrecognized(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES_LABEL,
            CategorySelection::Only(category) => category.label(),
            CategorySelection::Unrecognized(label) => label,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => product.category == *category,
            CategorySelection::Unrecognized(_) => false,
        }
    }

    /// The selectable filter buttons: the sentinel first, then every category.
    pub fn choices() -> Vec<CategorySelection> {
        std::iter::once(CategorySelection::All)
            .chain(Category::ALL.into_iter().map(CategorySelection::Only))
            .collect()
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category)
    }
}

impl From<&str> for CategorySelection {
    fn from(label: &str) -> Self {
        CategorySelection::parse(label)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
