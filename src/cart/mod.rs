mod cart;
mod item;

pub use cart::{Cart, CartSnapshot};
pub use item::CartItem;
