mod notifier;
mod section;
mod storefront;

pub use notifier::{ChangeKind, ChangeNotifier, StoreChange};
pub use section::Section;
pub use storefront::Storefront;
