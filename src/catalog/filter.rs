use super::{CategorySelection, Product};

/// Products matching `selection`, in catalog order.
///
/// The sentinel returns every product; a selection that names no category
/// returns nothing.
pub fn filter_products<'a>(products: &'a [Product], selection: &CategorySelection) -> Vec<&'a Product> {
    products.iter().filter(|product| selection.matches(product)).collect()
}
