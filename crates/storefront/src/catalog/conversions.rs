//! Conversions from catalog wire types to [`Product`].

use rust_decimal::Decimal;
use tailorzone_core::{Price, ProductId};

use super::CatalogError;
use super::types::{Product, RawPrice, RawProduct};

/// Image shown when a product has no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Resolve a product image reference against the catalog base URL.
///
/// - empty → [`PLACEHOLDER_IMAGE`]
/// - `http…` → unchanged
/// - `uploads/…` → `{base}/uploads/…`
/// - `/uploads/…` → `{base}/uploads/…`
/// - anything else is a bare file name → `{base}/uploads/{name}`
#[must_use]
pub fn image_url(base_url: &str, raw: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if raw.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else if raw.starts_with("http") {
        raw.to_string()
    } else if raw.starts_with("uploads/") {
        format!("{base}/{raw}")
    } else if raw.starts_with("/uploads/") {
        format!("{base}{raw}")
    } else {
        format!("{base}/uploads/{raw}")
    }
}

/// Normalize a wire price to a decimal.
fn convert_price(id: &str, price: &RawPrice) -> Result<Decimal, CatalogError> {
    let (result, value) = match price {
        RawPrice::Text(text) => (Price::parse_amount(text), text.clone()),
        RawPrice::Number(number) => (Price::from_f64_amount(*number), number.to_string()),
    };
    result.map_err(|source| CatalogError::InvalidPrice {
        id: id.to_string(),
        value,
        source,
    })
}

/// Convert a wire product, resolving its image against `base_url`.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPrice`] if the price is not a
/// non-negative decimal.
pub(crate) fn convert_product(raw: RawProduct, base_url: &str) -> Result<Product, CatalogError> {
    let price = convert_price(&raw.id, &raw.price)?;
    let image = raw
        .img
        .filter(|s| !s.is_empty())
        .or(raw.image_url)
        .unwrap_or_default();

    Ok(Product {
        id: ProductId::new(raw.id),
        product_id: raw.product_id,
        name: raw.name,
        price,
        category: raw.category.unwrap_or_default(),
        image_url: image_url(base_url, &image),
        in_stock: raw.in_stock_value.unwrap_or(0),
        sold: raw.sold_stock_value.unwrap_or(0),
        rating: raw.rating.unwrap_or(0.0),
        visibility: raw.visibility,
        description: raw.description,
    })
}

/// Convert a product list, skipping products with an unusable price.
///
/// Each skipped product is logged with its ID and the price as received.
pub(crate) fn convert_products(raw: Vec<RawProduct>, base_url: &str) -> Vec<Product> {
    raw.into_iter()
        .filter_map(|product| match convert_product(product, base_url) {
            Ok(product) => Some(product),
            Err(CatalogError::InvalidPrice { id, value, source }) => {
                tracing::warn!(id, value, error = %source, "Skipping product with invalid price");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unconvertible product");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000";

    fn raw(price: RawPrice) -> RawProduct {
        RawProduct {
            id: "t1".to_string(),
            product_id: None,
            name: "Embroidered Anarkali Suit".to_string(),
            price,
            category: Some("Traditional".to_string()),
            img: Some("anarkali.jpg".to_string()),
            image_url: None,
            in_stock_value: Some(15),
            sold_stock_value: Some(45),
            rating: Some(4.8),
            visibility: None,
            description: None,
        }
    }

    #[test]
    fn test_image_url_rules() {
        assert_eq!(image_url(BASE, ""), "/placeholder.svg");
        assert_eq!(
            image_url(BASE, "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            image_url(BASE, "uploads/a.jpg"),
            "http://localhost:5000/uploads/a.jpg"
        );
        assert_eq!(
            image_url(BASE, "/uploads/a.jpg"),
            "http://localhost:5000/uploads/a.jpg"
        );
        assert_eq!(image_url(BASE, "a.jpg"), "http://localhost:5000/uploads/a.jpg");
    }

    #[test]
    fn test_image_url_tolerates_trailing_slash() {
        assert_eq!(
            image_url("http://localhost:5000/", "a.jpg"),
            "http://localhost:5000/uploads/a.jpg"
        );
    }

    #[test]
    fn test_string_price_normalized() {
        let product = convert_product(raw(RawPrice::Text("2999".to_string())), BASE).unwrap();
        assert_eq!(product.price, Decimal::from(2999));
        assert_eq!(product.image_url, "http://localhost:5000/uploads/anarkali.jpg");
        assert_eq!(product.in_stock, 15);
        assert_eq!(product.category, "Traditional");
    }

    #[test]
    fn test_number_price_normalized() {
        let product = convert_product(raw(RawPrice::Number(2999.0)), BASE).unwrap();
        assert_eq!(product.price, Decimal::from(2999));
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let err = convert_product(raw(RawPrice::Text("call us".to_string())), BASE).unwrap_err();
        match err {
            CatalogError::InvalidPrice { id, value, .. } => {
                assert_eq!(id, "t1");
                assert_eq!(value, "call us");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_falls_back_to_image_url_field() {
        let mut product = raw(RawPrice::Number(10.0));
        product.img = None;
        product.image_url = Some("/uploads/b.png".to_string());
        let product = convert_product(product, BASE).unwrap();
        assert_eq!(product.image_url, "http://localhost:5000/uploads/b.png");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let mut product = raw(RawPrice::Number(10.0));
        product.img = None;
        product.category = None;
        product.in_stock_value = None;
        product.rating = None;
        let product = convert_product(product, BASE).unwrap();
        assert_eq!(product.image_url, PLACEHOLDER_IMAGE);
        assert_eq!(product.category, "");
        assert_eq!(product.in_stock, 0);
        assert!(product.rating.abs() < f64::EPSILON);
    }

    #[test]
    fn test_convert_products_skips_bad_price() {
        let mut bad = raw(RawPrice::Text(String::new()));
        bad.id = "t2".to_string();
        let mut good = raw(RawPrice::Number(450.0));
        good.id = "t3".to_string();

        let products = convert_products(vec![raw(RawPrice::Number(1.0)), bad, good], BASE);

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
    }
}
