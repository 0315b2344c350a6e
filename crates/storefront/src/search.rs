//! Product search.
//!
//! Case-insensitive substring matching over product name and category. No
//! ranking: matches come back in catalog order.

use crate::catalog::Product;

/// Whether `product` matches an already lower-cased `needle`.
fn matches(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Products whose name or category contains `term`, ignoring case.
///
/// The term is used as given, surrounding spaces included. An empty term
/// matches nothing.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter(|product| matches(product, &needle))
        .collect()
}
