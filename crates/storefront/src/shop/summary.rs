//! Order summary shown alongside the cart.

use rust_decimal::Decimal;
use tailorzone_core::Price;

/// Subtotal (in rupees) above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: u32 = 999;

/// Flat shipping fee (in rupees) charged at or below the threshold.
pub const FLAT_SHIPPING_FEE: u32 = 99;

/// Subtotal, shipping and grand total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// Shipping fee (zero when free).
    pub shipping: Decimal,
    /// `subtotal + shipping`.
    pub total: Decimal,
    /// How much more the shopper must add to qualify for free shipping.
    pub free_shipping_remaining: Option<Decimal>,
}

impl OrderSummary {
    /// Build a summary from a cart subtotal.
    ///
    /// Shipping is free only when the subtotal is strictly above the
    /// threshold. The "add more" hint appears only strictly below it, so a
    /// subtotal of exactly 999 pays shipping without a hint.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let threshold = Decimal::from(FREE_SHIPPING_THRESHOLD);

        let shipping = if subtotal > threshold {
            Decimal::ZERO
        } else {
            Decimal::from(FLAT_SHIPPING_FEE)
        };

        let free_shipping_remaining = (subtotal < threshold).then(|| threshold - subtotal);

        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
            free_shipping_remaining,
        }
    }

    /// Whether shipping is free.
    #[must_use]
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Subtotal for display.
    #[must_use]
    pub const fn subtotal_price(&self) -> Price {
        Price::inr(self.subtotal)
    }

    /// Shipping fee for display.
    #[must_use]
    pub const fn shipping_price(&self) -> Price {
        Price::inr(self.shipping)
    }

    /// Grand total for display.
    #[must_use]
    pub const fn total_price(&self) -> Price {
        Price::inr(self.total)
    }
}
