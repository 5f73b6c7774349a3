//! Cart route handlers.
//!
//! Every mutation persists the cart through its repository and responds with
//! the freshly recomputed state, so clients never have to track totals
//! themselves.

use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::{CartEntry, CartStore};
use crate::error::{AppError, Result};
use crate::routes::products::ProductView;
use crate::state::AppState;
use pixel_core::ProductId;

/// Cart line display data for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CartEntryView {
    pub product: ProductView,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartEntry> for CartEntryView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            product: ProductView::from(&entry.product),
            quantity: entry.quantity,
            line_total: entry.line_total().display(),
        }
    }
}

/// Cart display data for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub entries: Vec<CartEntryView>,
    pub total_price: String,
    pub total_quantity: u32,
}

impl CartView {
    fn from_store(cart: &CartStore) -> Self {
        let totals = cart.totals();
        Self {
            entries: cart.entries().iter().map(CartEntryView::from).collect(),
            total_price: totals.total_price.display(),
            total_quantity: totals.total_quantity,
        }
    }
}

/// Cart count badge data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Checkout confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: String,
}

/// Cart mutation request body.
#[derive(Debug, Deserialize)]
pub struct CartMutation {
    pub product_id: i32,
}

/// Current cart contents and totals.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let cart = state.cart().lock().await;
    Json(CartView::from_store(&cart))
}

/// Cart quantity badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCountView> {
    let cart = state.cart().lock().await;
    Json(CartCountView {
        count: cart.totals().total_quantity,
    })
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns 404 if the product id is not in the catalog, or 500 if the new
/// cart state cannot be persisted.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<CartMutation>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(body.product_id);
    let product = state
        .catalog()
        .by_id(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let mut cart = state.cart().lock().await;
    cart.add(&product)?;
    Ok(Json(CartView::from_store(&cart)))
}

/// Remove one unit of a product from the cart.
///
/// # Errors
///
/// Returns 404 if the product is not in the cart, or 500 if the new cart
/// state cannot be persisted.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<CartMutation>,
) -> Result<Json<CartView>> {
    let mut cart = state.cart().lock().await;
    cart.remove_one(ProductId::new(body.product_id))?;
    Ok(Json(CartView::from_store(&cart)))
}

/// Empty the cart.
///
/// # Errors
///
/// Returns 500 if the emptied state cannot be persisted.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Json<CartView>> {
    let mut cart = state.cart().lock().await;
    cart.clear()?;
    Ok(Json(CartView::from_store(&cart)))
}

/// Complete the purchase: empty the cart and confirm.
///
/// # Errors
///
/// Returns 500 if the emptied state cannot be persisted.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Json<CheckoutResponse>> {
    let mut cart = state.cart().lock().await;
    let purchased = cart.totals().total_quantity;
    cart.clear()?;

    tracing::info!(items = purchased, "Checkout completed");
    Ok(Json(CheckoutResponse {
        success: true,
        message: "Your purchase was completed successfully".to_string(),
    }))
}
