use serde::{Deserialize, Serialize};

/// Top-level page tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Home,
    Catalog,
    About,
    Delivery,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Catalog,
        Section::About,
        Section::Delivery,
        Section::Contacts,
    ];

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::About => "О нас",
            Section::Delivery => "Доставка",
            Section::Contacts => "Контакты",
        }
    }

    /// Heading shown at the top of the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Всё для вашего хобби",
            Section::Catalog => "Каталог товаров",
            Section::About => "О нас",
            Section::Delivery => "Доставка",
            Section::Contacts => "Контакты",
        }
    }
}
