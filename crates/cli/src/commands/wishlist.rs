//! Wishlist commands.
//!
//! # Usage
//!
//! ```bash
//! tz wishlist show
//! tz wishlist toggle w1
//! tz wishlist add-to-cart w1
//! ```

use tailorzone_core::ProductSummary;
use tailorzone_storefront::error::AppError;
use tailorzone_storefront::state::AppState;

use super::emit;
use crate::render;

/// Print the wishlist.
pub fn show(state: &AppState) -> Result<(), AppError> {
    let shop = state.shop()?;
    emit(&render::wishlist(shop.wishlist()));
    Ok(())
}

/// Save a product for later, or unsave it.
///
/// Unsaving uses the stored entry, so it works while the catalog is
/// unreachable or the product has been delisted.
pub async fn toggle(state: &AppState, id: &str) -> Result<(), AppError> {
    if let Some(name) = unsave(state, id)? {
        emit(&format!("Removed {name} from your wishlist"));
        return Ok(());
    }

    let product = state.catalog().get_product_by_id(id).await?;

    let mut shop = state.shop()?;
    let saved = shop.toggle_wishlist(&product.summary());
    shop.save()?;

    if saved {
        emit(&format!("Saved {} to your wishlist", product.name));
    } else {
        emit(&format!("Removed {} from your wishlist", product.name));
    }
    Ok(())
}

/// Remove `id` from the wishlist if saved, returning its name.
fn unsave(state: &AppState, id: &str) -> Result<Option<String>, AppError> {
    let mut shop = state.shop()?;
    let Some(summary) = shop.wishlist_item(id).map(ProductSummary::from) else {
        return Ok(None);
    };

    shop.toggle_wishlist(&summary);
    shop.save()?;
    Ok(Some(summary.name))
}

/// Add one unit of a saved product to the cart, using its saved fields.
pub fn add_to_cart(state: &AppState, id: &str) -> Result<(), AppError> {
    let mut shop = state.shop()?;
    let summary = shop
        .wishlist_item(id)
        .map(ProductSummary::from)
        .ok_or_else(|| AppError::NotFound(format!("{id} is not in the wishlist")))?;

    shop.add_to_cart(&summary);
    shop.save()?;

    tracing::info!(id, "Moved wishlist item to cart");
    emit(&format!(
        "Added {} to your cart ({} items total)",
        summary.name,
        shop.cart_count()
    ));
    Ok(())
}
