use super::common::validate_input;
use crate::{errors::ServiceError, handlers::AppState};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct ProductSearchParams {
    /// Partial product name, case-insensitive; empty or absent returns everything
    #[validate(length(max = 40, message = "product_name must be at most 40 characters"))]
    pub product_name: Option<String>,
}

/// Search product details by name
async fn search_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProductSearchParams>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&params)?;

    let result = state
        .services
        .catalog
        .search_products(params.product_name.as_deref())
        .await?;
    Ok(Json(result))
}

/// Stock level of every product plus the units-in-stock total
async fn product_stock(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServiceError> {
    let summary = state.services.catalog.stock_summary().await?;
    Ok(Json(summary))
}

pub fn product_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products/search", get(search_products))
        .route("/product/stock", get(product_stock))
}
