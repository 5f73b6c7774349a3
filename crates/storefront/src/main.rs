//! Pixel Storefront - catalog and cart server.
//!
//! This binary serves the storefront JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Product catalog loaded once from a static JSON file
//! - Cart persisted to a single JSON slot on disk
//!
//! A failed catalog load degrades to an empty catalog, and a corrupt cart
//! slot degrades to an empty cart; the server never refuses to start over
//! either.

#![cfg_attr(not(test), forbid(unsafe_code))]

use pixel_storefront::cart::{CartStore, JsonFileRepository};
use pixel_storefront::catalog::CatalogStore;
use pixel_storefront::config::StorefrontConfig;
use pixel_storefront::routes;
use pixel_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pixel_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the catalog; a failed load degrades to an empty catalog
    let catalog = match CatalogStore::load(&config.catalog_path).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("Failed to load catalog, starting empty: {e}");
            CatalogStore::empty()
        }
    };

    // Open the cart from its durable slot
    let cart = CartStore::open(Box::new(JsonFileRepository::new(config.cart_path.clone())));
    tracing::info!(
        items = cart.totals().total_quantity,
        "Cart restored from storage"
    );

    // Build application state and router
    let state = AppState::new(config.clone(), catalog, cart);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
