use super::common::SkipLimitParams;
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

#[derive(Debug, Deserialize, IntoParams)]
pub struct InvoiceParams {
    #[serde(rename = "orderID")]
    pub order_id: i32,
}

/// Get invoice information by OrderID
async fn order_invoice(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InvoiceParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let invoice = state.services.invoices.build_invoice(params.order_id).await?;
    Ok(Json(invoice))
}

/// Offset/limit listing of raw order detail rows
async fn list_order_details(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SkipLimitParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let rows = state
        .services
        .invoices
        .list_order_details(params.skip, params.limit)
        .await?;
    Ok(Json(rows))
}

pub fn order_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orderdetail", get(order_invoice))
        .route("/orderdetails", get(list_order_details))
}
