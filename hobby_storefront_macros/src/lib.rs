mod aggregate;
mod digest;

use proc_macro::TokenStream;

/// Records a journal event on the aggregate's entity before the method body runs.
///
/// The typed parameters of the method become the event payload, encoded as a
/// tuple in declaration order. The replay side (`aggregate!`) decodes the same
/// tuple and calls the method again, so parameter order is part of the
/// journal format.
///
/// ```ignore
/// #[digest("ItemRemoved", when = self.items.contains_key(&product_id))]
/// fn apply_removal(&mut self, product_id: ProductId) {
///     self.items.shift_remove(&product_id);
/// }
/// ```
///
/// - `when = <expr>` guards both the recording and the body; when the guard is
///   false the call is a no-op and nothing is journaled.
/// - A leading identifier selects a different entity field:
///   `#[digest(journal, "ItemAdded")]`. The default field is `entity`.
#[proc_macro_attribute]
pub fn digest(attr: TokenStream, item: TokenStream) -> TokenStream {
    digest::expand(attr, item)
}

/// Implements `hobby_storefront::Aggregate` for a type, mapping journal event
/// names back to the methods that produced them.
///
/// ```ignore
/// hobby_storefront::aggregate!(Cart, entity {
///     "ItemAdded"(product) => apply_addition,
///     "ItemRemoved"(product_id) => apply_removal,
///     "QuantitySet"(product_id, quantity) => apply_quantity,
/// });
/// ```
///
/// Write `=> method()` when the event carries a payload the method ignores.
/// Unknown event names fail the replay.
#[proc_macro]
pub fn aggregate(input: TokenStream) -> TokenStream {
    aggregate::expand(input)
}
