//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::state::AppState;
use pixel_core::ProductId;

/// Product display data for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.display(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    /// Exact category filter; omit for the full catalog.
    pub category: Option<String>,
}

/// Product listing, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Json<Vec<ProductView>> {
    let catalog = state.catalog();
    let products: Vec<ProductView> = match query.category.as_deref() {
        Some(category) => catalog
            .by_category(category)
            .into_iter()
            .map(ProductView::from)
            .collect(),
        None => catalog.all().iter().map(ProductView::from).collect(),
    };

    Json(products)
}

/// Product detail by id.
///
/// # Errors
///
/// Returns 404 if no product has the given id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductView>> {
    state
        .catalog()
        .by_id(ProductId::new(id))
        .map(|product| Json(ProductView::from(product)))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
