//! Plain-text rendering for CLI output.

use std::fmt::Write;

use tailorzone_core::{CartItem, Price, WishlistItem};
use tailorzone_storefront::catalog::Product;
use tailorzone_storefront::pagination::Pagination;
use tailorzone_storefront::shop::OrderSummary;

/// One-line product listing entry.
pub fn product_line(product: &Product, in_wishlist: bool) -> String {
    let heart = if in_wishlist { " ♥" } else { "" };
    let stock = if product.is_in_stock() {
        format!("{} in stock", product.in_stock)
    } else {
        "out of stock".to_string()
    };
    format!(
        "{:<12} {} [{}] {} ({stock}){heart}",
        product.id,
        product.name,
        product.category,
        product.display_price(),
    )
}

/// Multi-line product detail.
pub fn product_detail(product: &Product, in_wishlist: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.name);
    let _ = writeln!(out, "  ID:       {}", product.id);
    let _ = writeln!(out, "  Category: {}", product.category);
    let _ = writeln!(out, "  Price:    {}", product.display_price());
    let _ = writeln!(out, "  Rating:   {:.1}", product.rating);
    let _ = writeln!(
        out,
        "  Stock:    {} available, {} sold",
        product.in_stock, product.sold
    );
    let _ = writeln!(out, "  Image:    {}", product.image_url);
    if in_wishlist {
        let _ = writeln!(out, "  ♥ In your wishlist");
    }
    if let Some(description) = &product.description {
        let _ = writeln!(out);
        let _ = writeln!(out, "{description}");
    }
    out
}

/// Footer naming the current page and how to reach its neighbours.
pub fn page_footer(pagination: &Pagination, page: usize) -> String {
    let mut out = format!(
        "Page {page} of {} ({} products, {} per page)",
        pagination.page_count().max(1),
        pagination.total(),
        pagination.per_page()
    );
    if pagination.has_previous(page) {
        let _ = write!(out, "  [--page {}: previous]", page - 1);
    }
    if pagination.has_next(page) {
        let _ = write!(out, "  [--page {}: next]", page + 1);
    }
    out
}

/// Cart lines followed by the order summary.
pub fn cart(items: &[CartItem], count: u64, summary: &OrderSummary) -> String {
    if items.is_empty() {
        return "Your cart is empty. Start adding some items to your cart!\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "{:<12} {} × {} = {}",
            item.id,
            item.name,
            item.quantity,
            Price::inr(item.line_total()),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Items:    {count}");
    let _ = writeln!(out, "Subtotal: {}", summary.subtotal_price());
    if summary.is_free_shipping() {
        let _ = writeln!(out, "Shipping: Free");
    } else {
        let _ = writeln!(out, "Shipping: {}", summary.shipping_price());
    }
    let _ = writeln!(out, "Total:    {}", summary.total_price());
    if let Some(remaining) = summary.free_shipping_remaining {
        let _ = writeln!(
            out,
            "Add {} more for free shipping",
            Price::inr(remaining)
        );
    }
    out
}

/// Wishlist entries.
pub fn wishlist(items: &[WishlistItem]) -> String {
    if items.is_empty() {
        return "Your wishlist is empty.\n".to_string();
    }

    items.iter().fold(String::new(), |mut out, item| {
        let _ = writeln!(
            out,
            "{:<12} {} {}",
            item.id,
            item.name,
            Price::inr(item.price)
        );
        out
    })
}
