//! Integration tests for the catalog client.
//!
//! Each test starts an in-process stub of the catalog service on an
//! ephemeral port and points a real `CatalogClient` at it.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use tailorzone_storefront::catalog::CatalogError;
use tailorzone_storefront::catalog::{CatalogClient, Product};
use tailorzone_storefront::config::{CatalogConfig, StorefrontConfig};
use tailorzone_storefront::state::AppState;
use tailorzone_storefront::storage::MemoryStore;

// ============================================================================
// Stub catalog service
// ============================================================================

#[derive(Clone, Default)]
struct Hits {
    listing: Arc<AtomicUsize>,
    category: Arc<AtomicUsize>,
    product: Arc<AtomicUsize>,
}

#[derive(Deserialize)]
struct CategoryBody {
    category: String,
}

fn saree() -> Value {
    json!({
        "_id": "t1",
        "productId": "TZ-001",
        "name": "Silk Saree",
        "price": "1499.00",
        "category": "traditional",
        "img": "uploads/saree.jpg",
        "inStockValue": 5,
        "soldStockValue": 2,
        "rating": 4.5,
        "visibility": "on",
        "description": "Handwoven silk"
    })
}

fn jacket() -> Value {
    json!({
        "_id": "w1",
        "name": "Denim Jacket",
        "price": 899,
        "category": "western",
        "imageUrl": "https://cdn.example.com/jacket.jpg"
    })
}

fn kurta() -> Value {
    json!({
        "_id": "t2",
        "name": "Cotton Kurta",
        "price": "450",
        "category": "traditional",
        "img": "kurta.png",
        "inStockValue": 0
    })
}

fn catalog() -> Vec<Value> {
    vec![saree(), jacket(), kurta()]
}

async fn list_products(State(hits): State<Hits>) -> Json<Value> {
    hits.listing.fetch_add(1, Ordering::SeqCst);
    Json(json!({ "products": catalog() }))
}

async fn products_by_category(
    State(hits): State<Hits>,
    Json(body): Json<CategoryBody>,
) -> Json<Value> {
    hits.category.fetch_add(1, Ordering::SeqCst);
    let products: Vec<Value> = catalog()
        .into_iter()
        .filter(|p| p["category"] == body.category.as_str())
        .collect();
    // Bare array form
    Json(Value::Array(products))
}

async fn product_by_id(State(hits): State<Hits>, Path(id): Path<String>) -> Response {
    hits.product.fetch_add(1, Ordering::SeqCst);
    if id == "ghost" {
        return Json(json!({})).into_response();
    }
    match catalog().into_iter().find(|p| p["_id"] == id.as_str()) {
        Some(product) => Json(json!({ "product": product })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response(),
    }
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn stub_service() -> (String, Hits) {
    let hits = Hits::default();
    let router = Router::new()
        .route("/get-product", get(list_products))
        .route("/product/category", post(products_by_category))
        .route("/product/{id}", get(product_by_id))
        .with_state(hits.clone());
    (serve(router).await, hits)
}

fn client_for(base: &str) -> CatalogClient {
    CatalogClient::new(&CatalogConfig::with_base_url(base).unwrap()).unwrap()
}

fn find<'a>(products: &'a [Product], id: &str) -> &'a Product {
    products.iter().find(|p| p.id == id).unwrap()
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_listing_normalizes_prices_and_images() {
    let (base, _) = stub_service().await;
    let client = client_for(&base);

    let products = client.get_all_products().await.unwrap();
    assert_eq!(products.len(), 3);

    let saree = find(&products, "t1");
    assert_eq!(saree.price, Decimal::from(1499));
    assert_eq!(saree.image_url, format!("{base}/uploads/saree.jpg"));
    assert_eq!(saree.in_stock, 5);
    assert_eq!(saree.sold, 2);
    assert_eq!(saree.product_id.as_deref(), Some("TZ-001"));

    let jacket = find(&products, "w1");
    assert_eq!(jacket.price, Decimal::from(899));
    assert_eq!(jacket.image_url, "https://cdn.example.com/jacket.jpg");
    assert!(!jacket.is_in_stock());

    let kurta = find(&products, "t2");
    assert_eq!(kurta.image_url, format!("{base}/uploads/kurta.png"));
}

#[tokio::test]
async fn test_listing_is_cached_until_invalidated() {
    let (base, hits) = stub_service().await;
    let client = client_for(&base);

    client.get_all_products().await.unwrap();
    client.get_all_products().await.unwrap();
    assert_eq!(hits.listing.load(Ordering::SeqCst), 1);

    client.invalidate_cache();
    client.get_all_products().await.unwrap();
    assert_eq!(hits.listing.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_category_accepts_bare_array() {
    let (base, hits) = stub_service().await;
    let client = client_for(&base);

    let traditional = client.get_products_by_category("traditional").await.unwrap();
    let ids: Vec<&str> = traditional.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2"]);

    let western = client.get_products_by_category("western").await.unwrap();
    assert_eq!(western.len(), 1);

    // Each category is cached under its own key
    client.get_products_by_category("traditional").await.unwrap();
    assert_eq!(hits.category.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_unknown_category_is_empty() {
    let (base, _) = stub_service().await;
    let client = client_for(&base);

    let products = client.get_products_by_category("bridal").await.unwrap();
    assert!(products.is_empty());
}

// ============================================================================
// Single product
// ============================================================================

#[tokio::test]
async fn test_product_by_id() {
    let (base, hits) = stub_service().await;
    let client = client_for(&base);

    let product = client.get_product_by_id("t1").await.unwrap();
    assert_eq!(product.name, "Silk Saree");
    assert_eq!(product.description.as_deref(), Some("Handwoven silk"));

    client.get_product_by_id("t1").await.unwrap();
    assert_eq!(hits.product.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_product_404_is_not_found() {
    let (base, _) = stub_service().await;
    let client = client_for(&base);

    let err = client.get_product_by_id("nope").await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(ref msg) if msg.contains("nope")));
}

#[tokio::test]
async fn test_product_missing_from_body_is_not_found() {
    let (base, _) = stub_service().await;
    let client = client_for(&base);

    let err = client.get_product_by_id("ghost").await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_server_error_is_status_error() {
    let router = Router::new().route(
        "/get-product",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
    );
    let base = serve(router).await;
    let client = client_for(&base);

    let err = client.get_all_products().await.unwrap_err();
    match err {
        CatalogError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "database down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_listing_skips_product_with_bad_price() {
    let router = Router::new().route(
        "/get-product",
        get(|| async {
            Json(json!({ "products": [
                saree(),
                { "_id": "x1", "name": "Mystery", "price": "call us" },
                jacket()
            ]}))
        }),
    );
    let base = serve(router).await;
    let client = client_for(&base);

    let products = client.get_all_products().await.unwrap();
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "w1"]);
}

#[tokio::test]
async fn test_single_product_with_bad_price_is_rejected() {
    let router = Router::new().route(
        "/product/{id}",
        get(|| async {
            Json(json!({ "product": { "_id": "x1", "name": "Mystery", "price": "call us" } }))
        }),
    );
    let base = serve(router).await;
    let client = client_for(&base);

    let err = client.get_product_by_id("x1").await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPrice { ref id, .. } if id == "x1"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let router = Router::new().route("/get-product", get(|| async { "not json" }));
    let base = serve(router).await;
    let client = client_for(&base);

    let err = client.get_all_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

// ============================================================================
// Catalog into shop
// ============================================================================

#[tokio::test]
async fn test_fetched_product_goes_into_cart() {
    let (base, _) = stub_service().await;
    let config = StorefrontConfig {
        catalog: CatalogConfig::with_base_url(&base).unwrap(),
        data_dir: std::env::temp_dir(),
        products_per_page: 12,
    };
    let state = AppState::with_storage(config, Arc::new(MemoryStore::new())).unwrap();

    let saree = state.catalog().get_product_by_id("t1").await.unwrap();
    let jacket = state.catalog().get_product_by_id("w1").await.unwrap();

    let mut shop = state.shop().unwrap();
    shop.add_to_cart(&saree.summary());
    shop.add_to_cart(&saree.summary());
    shop.add_to_cart(&jacket.summary());

    assert_eq!(shop.cart_count(), 3);
    assert_eq!(shop.cart_total(), Decimal::from(1499 * 2 + 899));
    assert!(shop.order_summary().is_free_shipping());
    assert_eq!(shop.cart()[0].image_ref, format!("{base}/uploads/saree.jpg"));
}
