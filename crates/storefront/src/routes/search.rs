//! Search route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::routes::products::ProductView;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Case-insensitive substring search over product names.
///
/// An empty query returns the full catalog, matching the original search
/// box behavior as the input empties.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<ProductView>> {
    let results: Vec<ProductView> = state
        .catalog()
        .by_name_contains(&query.q)
        .into_iter()
        .map(ProductView::from)
        .collect();

    Json(results)
}
