use super::common::read_file_upload;
use crate::{errors::ServiceError, handlers::AppState, services::imports::ensure_csv_filename};
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadMessage {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerUploadResponse {
    pub message: String,
    pub count: usize,
}

/// Add shippers from an uploaded CSV file
async fn upload_shippers(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ServiceError> {
    let (filename, data) = read_file_upload(&mut multipart).await?;
    ensure_csv_filename(&filename)?;

    state.services.imports.import_shippers(&data).await?;
    Ok(Json(
        "CSV file uploaded and shippers added successfully".to_string(),
    ))
}

/// Import products from an uploaded CSV file
async fn upload_products(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ServiceError> {
    let (filename, data) = read_file_upload(&mut multipart).await?;
    ensure_csv_filename(&filename)?;

    state.services.imports.import_products(&data).await?;
    Ok(Json(UploadMessage {
        message: "CSV file uploaded successfully".to_string(),
    }))
}

/// Import customers from an uploaded CSV file
async fn upload_customers(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ServiceError> {
    let (filename, data) = read_file_upload(&mut multipart).await?;
    ensure_csv_filename(&filename)?;

    let count = state.services.imports.import_customers(&data).await?;
    Ok(Json(CustomerUploadResponse {
        message: "Customers imported successfully".to_string(),
        count,
    }))
}

pub fn import_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Capitalized segment kept for compatibility with existing clients
        .route("/Shipper/upload-data", post(upload_shippers))
        .route("/products/upload-data", post(upload_products))
        .route("/customers/upload-data", post(upload_customers))
}
