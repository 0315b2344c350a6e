//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! tz cart add t1
//! tz cart set t1 3
//! tz cart remove t1
//! tz cart show
//! tz cart clear-storage
//! ```

use tailorzone_storefront::config::StorefrontConfig;
use tailorzone_storefront::error::AppError;
use tailorzone_storefront::shop::ShopStore;
use tailorzone_storefront::state::AppState;
use tailorzone_storefront::storage::FileStore;

use super::emit;
use crate::render;

/// Print the cart and its order summary.
pub fn show(state: &AppState) -> Result<(), AppError> {
    let shop = state.shop()?;
    emit(&render::cart(
        shop.cart(),
        shop.cart_count(),
        &shop.order_summary(),
    ));
    Ok(())
}

/// Add one unit of a catalog product.
pub async fn add(state: &AppState, id: &str) -> Result<(), AppError> {
    let product = state.catalog().get_product_by_id(id).await?;

    let mut shop = state.shop()?;
    shop.add_to_cart(&product.summary());
    shop.save()?;

    let quantity = shop.cart_item(id).map_or(0, |item| item.quantity);
    tracing::info!(id, quantity, "Added to cart");
    emit(&format!(
        "Added {} to your cart ({quantity} in cart, {} items total)",
        product.name,
        shop.cart_count()
    ));
    Ok(())
}

/// Remove a product's cart line.
pub fn remove(state: &AppState, id: &str) -> Result<(), AppError> {
    let mut shop = state.shop()?;
    let existed = shop.cart_item(id).is_some();
    shop.remove_from_cart(id);
    shop.save()?;

    if existed {
        emit(&format!("Removed {id} from your cart"));
    } else {
        emit(&format!("{id} was not in your cart"));
    }
    Ok(())
}

/// Set a line's quantity; zero or below removes it.
pub fn set_quantity(state: &AppState, id: &str, quantity: i64) -> Result<(), AppError> {
    let mut shop = state.shop()?;
    if shop.cart_item(id).is_none() {
        return Err(AppError::NotFound(format!("{id} is not in the cart")));
    }

    shop.update_quantity(id, quantity);
    shop.save()?;

    match shop.cart_item(id) {
        Some(item) => emit(&format!("{} quantity set to {}", item.name, item.quantity)),
        None => emit(&format!("Removed {id} from your cart")),
    }
    Ok(())
}

/// Delete both snapshots without opening the store.
pub fn clear_storage(config: &StorefrontConfig) -> Result<(), AppError> {
    let storage = FileStore::open(&config.data_dir)?;
    ShopStore::clear_snapshots(&storage)?;
    tracing::info!(dir = %storage.root().display(), "Cleared saved cart and wishlist");
    emit("Cleared saved cart and wishlist");
    Ok(())
}
