//! Integration tests for the Pixel storefront.
//!
//! # Test Categories
//!
//! - `storefront_api` - HTTP surface tests against a server on an ephemeral
//!   port
//! - `cart_flow` - Store-level cart scenarios, including persistence across
//!   reopen

use pixel_core::{Price, ProductId};
use pixel_storefront::cart::CartStore;
use pixel_storefront::catalog::{CatalogStore, Product};
use pixel_storefront::config::StorefrontConfig;
use pixel_storefront::routes;
use pixel_storefront::state::AppState;

/// A running storefront instance plus a client to talk to it.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestContext {
    /// Start the app on an ephemeral port with the given stores.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound; tests have no recovery path.
    pub async fn spawn(catalog: CatalogStore, cart: CartStore) -> Self {
        let state = AppState::new(StorefrontConfig::default(), catalog, cart);
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Build a URL for a path on this instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// A product for seeding test catalogs.
#[must_use]
pub fn product(id: i32, name: &str, price: &str, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price.parse().expect("decimal literal")),
        category: category.to_string(),
        image: format!("images/{id}.jpg"),
    }
}

/// The two-product catalog used by the scenario tests.
#[must_use]
pub fn scenario_catalog() -> CatalogStore {
    CatalogStore::from_products(vec![
        product(1, "Phone", "100", "Electronics"),
        product(2, "Book", "20", "Media"),
    ])
}

/// A slightly larger catalog for query tests.
#[must_use]
pub fn seed_catalog() -> CatalogStore {
    CatalogStore::from_products(vec![
        product(1, "Phone", "100", "Electronics"),
        product(2, "Book", "20", "Media"),
        product(3, "Headphones", "45.50", "Electronics"),
        product(4, "Notebook", "5", "Media"),
    ])
}
