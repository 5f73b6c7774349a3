//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (wired in main)
//!
//! # Products
//! GET  /products               - Product listing (optional ?category=)
//! GET  /products/{id}          - Product detail
//! GET  /search?q=              - Name search
//!
//! # Cart
//! GET  /cart                   - Cart contents and totals
//! GET  /cart/count             - Cart quantity badge
//! POST /cart/add               - Add one unit of a product
//! POST /cart/remove            - Remove one unit of a product
//! POST /cart/clear             - Empty the cart
//! POST /cart/checkout          - Complete the purchase (empties the cart)
//! ```

pub mod cart;
pub mod products;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product routes
        .nest("/products", product_routes())
        // Name search
        .route("/search", get(search::search))
        // Cart routes
        .nest("/cart", cart_routes())
}

/// Build the complete application, ready to serve.
///
/// Used by `main` and by the integration tests, which bind it to an
/// ephemeral port.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
