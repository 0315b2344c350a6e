//! Product browsing commands.
//!
//! # Usage
//!
//! ```bash
//! tz products
//! tz products --category western --page 2 --per-page 8
//! tz product t1
//! tz search "silk saree"
//! ```

use tailorzone_storefront::error::AppError;
use tailorzone_storefront::pagination::Pagination;
use tailorzone_storefront::search::filter_products;
use tailorzone_storefront::state::AppState;

use super::emit;
use crate::render;

/// List one page of products, optionally restricted to a category.
pub async fn list(
    state: &AppState,
    category: Option<&str>,
    page: usize,
    per_page: Option<usize>,
) -> Result<(), AppError> {
    let products = match category {
        Some(category) => state.catalog().get_products_by_category(category).await?,
        None => state.catalog().get_all_products().await?,
    };

    if products.is_empty() {
        emit(match category {
            Some(_) => "No products found in this category.",
            None => "No products available at the moment.",
        });
        return Ok(());
    }

    let pagination = Pagination::new(
        per_page.unwrap_or(state.config().products_per_page),
        products.len(),
    );
    let page = pagination.clamp_page(page);

    let shop = state.shop()?;
    let mut out = String::new();
    for product in pagination.page(&products, page) {
        out.push_str(&render::product_line(
            product,
            shop.is_in_wishlist(product.id.as_str()),
        ));
        out.push('\n');
    }
    out.push_str(&render::page_footer(&pagination, page));
    emit(&out);
    Ok(())
}

/// Show a single product.
pub async fn show(state: &AppState, id: &str) -> Result<(), AppError> {
    let product = state.catalog().get_product_by_id(id).await?;
    let in_wishlist = state.shop()?.is_in_wishlist(id);
    emit(&render::product_detail(&product, in_wishlist));
    Ok(())
}

/// Search the full listing by name or category.
pub async fn search(state: &AppState, term: &str) -> Result<(), AppError> {
    if term.trim().is_empty() {
        return Err(AppError::BadRequest("search term cannot be empty".to_string()));
    }

    let products = state.catalog().get_all_products().await?;
    let results = filter_products(&products, term);
    tracing::info!(term, matches = results.len(), "Searched products");

    if results.is_empty() {
        emit("No products found");
        return Ok(());
    }

    let shop = state.shop()?;
    let out = results
        .iter()
        .map(|product| render::product_line(product, shop.is_in_wishlist(product.id.as_str())))
        .collect::<Vec<_>>()
        .join("\n");
    emit(&out);
    Ok(())
}
