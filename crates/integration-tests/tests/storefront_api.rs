//! HTTP surface tests against a server bound to an ephemeral port.

use pixel_integration_tests::{TestContext, scenario_catalog, seed_catalog};
use pixel_storefront::cart::{CartStore, InMemoryRepository};
use serde_json::{Value, json};

fn fresh_cart() -> CartStore {
    CartStore::open(Box::new(InMemoryRepository::new()))
}

async fn get_json(ctx: &TestContext, path: &str) -> Value {
    let resp = ctx
        .client
        .get(ctx.url(path))
        .send()
        .await
        .expect("request");
    assert!(
        resp.status().is_success(),
        "GET {path} returned {}",
        resp.status()
    );
    resp.json().await.expect("json body")
}

fn names(products: &Value) -> Vec<&str> {
    products
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect()
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::spawn(seed_catalog(), fresh_cart()).await;
    let resp = ctx
        .client
        .get(ctx.url("/health"))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn test_product_listing_in_catalog_order() {
    let ctx = TestContext::spawn(seed_catalog(), fresh_cart()).await;
    let products = get_json(&ctx, "/products").await;
    assert_eq!(
        names(&products),
        vec!["Phone", "Book", "Headphones", "Notebook"]
    );
}

#[tokio::test]
async fn test_category_filter_is_case_sensitive() {
    let ctx = TestContext::spawn(seed_catalog(), fresh_cart()).await;

    let electronics = get_json(&ctx, "/products?category=Electronics").await;
    assert_eq!(names(&electronics), vec!["Phone", "Headphones"]);

    let lowercase = get_json(&ctx, "/products?category=electronics").await;
    assert!(lowercase.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn test_product_detail_and_miss() {
    let ctx = TestContext::spawn(seed_catalog(), fresh_cart()).await;

    let phone = get_json(&ctx, "/products/1").await;
    assert_eq!(phone["name"], "Phone");
    assert_eq!(phone["price"], "$100.00");

    let resp = ctx
        .client
        .get(ctx.url("/products/99"))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let ctx = TestContext::spawn(seed_catalog(), fresh_cart()).await;

    let results = get_json(&ctx, "/search?q=pHoNe").await;
    assert_eq!(names(&results), vec!["Phone", "Headphones"]);

    let all = get_json(&ctx, "/search?q=").await;
    assert_eq!(all.as_array().expect("array").len(), 4);

    let none = get_json(&ctx, "/search?q=tractor").await;
    assert!(none.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn test_cart_add_remove_flow() {
    let ctx = TestContext::spawn(scenario_catalog(), fresh_cart()).await;

    for product_id in [1, 1, 2] {
        let resp = ctx
            .client
            .post(ctx.url("/cart/add"))
            .json(&json!({ "product_id": product_id }))
            .send()
            .await
            .expect("request");
        assert!(resp.status().is_success());
    }

    let cart = get_json(&ctx, "/cart").await;
    assert_eq!(cart["total_quantity"], 3);
    assert_eq!(cart["total_price"], "$220.00");
    let entries = cart["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["product"]["id"], 1);
    assert_eq!(entries[0]["quantity"], 2);
    assert_eq!(entries[0]["line_total"], "$200.00");

    // Remove one unit of the phone, then the last one
    let cart: Value = ctx
        .client
        .post(ctx.url("/cart/remove"))
        .json(&json!({ "product_id": 1 }))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(cart["total_quantity"], 2);
    assert_eq!(cart["total_price"], "$120.00");

    let cart: Value = ctx
        .client
        .post(ctx.url("/cart/remove"))
        .json(&json!({ "product_id": 1 }))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(cart["total_quantity"], 1);
    assert_eq!(cart["total_price"], "$20.00");
    assert_eq!(cart["entries"].as_array().expect("entries").len(), 1);
}

#[tokio::test]
async fn test_cart_mutations_on_unknown_ids_are_404() {
    let ctx = TestContext::spawn(scenario_catalog(), fresh_cart()).await;

    // Product not in the catalog
    let resp = ctx
        .client
        .post(ctx.url("/cart/add"))
        .json(&json!({ "product_id": 99 }))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), 404);

    // Product in the catalog but not in the cart
    let resp = ctx
        .client
        .post(ctx.url("/cart/remove"))
        .json(&json!({ "product_id": 1 }))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), 404);

    // Cart untouched either way
    let count = get_json(&ctx, "/cart/count").await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn test_checkout_empties_the_cart() {
    let ctx = TestContext::spawn(scenario_catalog(), fresh_cart()).await;

    for product_id in [1, 2] {
        ctx.client
            .post(ctx.url("/cart/add"))
            .json(&json!({ "product_id": product_id }))
            .send()
            .await
            .expect("request");
    }

    let confirmation: Value = ctx
        .client
        .post(ctx.url("/cart/checkout"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(confirmation["success"], true);

    let count = get_json(&ctx, "/cart/count").await;
    assert_eq!(count["count"], 0);

    // Clearing an already-empty cart is fine
    let resp = ctx
        .client
        .post(ctx.url("/cart/clear"))
        .send()
        .await
        .expect("request");
    assert!(resp.status().is_success());
    let cart = get_json(&ctx, "/cart").await;
    assert_eq!(cart["total_price"], "$0.00");
}
