mod model;
mod text;

pub use model::{CartLine, CartPanel, CategoryButton, NavTab, ProductCard, SectionBody, StorefrontView};
pub use text::{Render, TextRenderer};
