use crate::db::DbPool;
use crate::entities::{customer, product, shipper};
use crate::errors::ServiceError;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Column sets of the supported upload files. CSV headers carry the classic
/// Northwind capitalized names; they map onto snake_case entity fields here and
/// nowhere else.
const SHIPPER_COLUMNS: &[&str] = &["CompanyName", "Phone"];
const PRODUCT_COLUMNS: &[&str] = &[
    "ProductName",
    "SupplierID",
    "CategoryID",
    "QuantityPerUnit",
    "UnitPrice",
    "UnitsInStock",
    "UnitsOnOrder",
    "ReorderLevel",
    "Discontinued",
];
const CUSTOMER_COLUMNS: &[&str] = &[
    "CustomerID",
    "CompanyName",
    "ContactName",
    "ContactTitle",
    "Address",
    "City",
    "PostalCode",
    "Country",
    "Phone",
    "Fax",
];

#[derive(Debug, Deserialize)]
struct ShipperRow {
    #[serde(rename = "CompanyName")]
    company_name: String,
    #[serde(rename = "Phone")]
    phone: String,
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(rename = "ProductName")]
    product_name: String,
    #[serde(rename = "SupplierID")]
    supplier_id: i32,
    #[serde(rename = "CategoryID")]
    category_id: i32,
    #[serde(rename = "QuantityPerUnit")]
    quantity_per_unit: String,
    #[serde(rename = "UnitPrice")]
    unit_price: Decimal,
    #[serde(rename = "UnitsInStock")]
    units_in_stock: i32,
    #[serde(rename = "UnitsOnOrder")]
    units_on_order: i32,
    #[serde(rename = "ReorderLevel")]
    reorder_level: i32,
    /// 0/1 flag in the classic dataset exports
    #[serde(rename = "Discontinued")]
    discontinued: i32,
}

#[derive(Debug, Deserialize)]
struct CustomerRow {
    #[serde(rename = "CustomerID")]
    customer_id: String,
    #[serde(rename = "CompanyName")]
    company_name: String,
    #[serde(rename = "ContactName")]
    contact_name: String,
    #[serde(rename = "ContactTitle")]
    contact_title: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "PostalCode")]
    postal_code: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Phone")]
    phone: String,
    #[serde(rename = "Fax")]
    fax: String,
}

/// Rejects input not named like a CSV file, before any parsing happens.
pub fn ensure_csv_filename(filename: &str) -> Result<(), ServiceError> {
    if filename.ends_with(".csv") {
        Ok(())
    } else {
        Err(ServiceError::InvalidInput("File is not a CSV".to_string()))
    }
}

fn missing_columns(headers: &csv::StringRecord, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect()
}

fn unknown_columns(headers: &csv::StringRecord, known: &[&str]) -> Vec<String> {
    headers
        .iter()
        .filter(|h| !known.contains(h))
        .map(|h| h.to_string())
        .collect()
}

fn parse_rows<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<Vec<T>, ServiceError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(data);
    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        let row = record
            .map_err(|e| ServiceError::InvalidInput(format!("failed to parse CSV row: {}", e)))?;
        rows.push(row);
    }
    Ok(rows)
}

fn read_headers(data: &[u8]) -> Result<csv::StringRecord, ServiceError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(data);
    reader
        .headers()
        .map(|h| h.clone())
        .map_err(|e| ServiceError::InvalidInput(format!("failed to read CSV headers: {}", e)))
}

/// CSV bulk ingestion for shippers, products and customers.
///
/// Dedup existence checks run against persisted state only; duplicate rows within
/// one file are not suppressed against each other. The checks are also not atomic
/// with the insert, so concurrent identical uploads can race in duplicates.
pub struct CsvImportService {
    db: Arc<DbPool>,
}

impl CsvImportService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Loads shippers, skipping rows whose (company name, phone) pair already
    /// exists. Fails if nothing new remains. All survivors insert in one
    /// transaction; any failure rolls the whole batch back.
    #[instrument(skip(self, data))]
    pub async fn import_shippers(&self, data: &[u8]) -> Result<usize, ServiceError> {
        let headers = read_headers(data)?;
        let missing = missing_columns(&headers, SHIPPER_COLUMNS);
        if !missing.is_empty() {
            return Err(ServiceError::InvalidInput(format!(
                "Missing columns: {}",
                missing.join(", ")
            )));
        }

        let rows: Vec<ShipperRow> = parse_rows(data)?;

        let mut fresh = Vec::new();
        for row in rows {
            let existing = shipper::Entity::find()
                .filter(shipper::Column::CompanyName.eq(&row.company_name))
                .filter(shipper::Column::Phone.eq(&row.phone))
                .one(&*self.db)
                .await?;
            if existing.is_none() {
                fresh.push(shipper::ActiveModel {
                    company_name: Set(row.company_name),
                    phone: Set(row.phone),
                    ..Default::default()
                });
            }
        }

        if fresh.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Data already exists or no rows matched expected columns".to_string(),
            ));
        }

        let inserted = fresh.len();
        let txn = self.db.begin().await?;
        shipper::Entity::insert_many(fresh).exec(&txn).await?;
        txn.commit().await?;

        info!(inserted, "imported shippers from CSV");
        Ok(inserted)
    }

    /// Loads products, skipping rows whose product name already exists. The name-only
    /// check (vs the two-field shipper check) mirrors the upstream data contract.
    #[instrument(skip(self, data))]
    pub async fn import_products(&self, data: &[u8]) -> Result<usize, ServiceError> {
        let headers = read_headers(data)?;
        let missing = missing_columns(&headers, PRODUCT_COLUMNS);
        if !missing.is_empty() {
            return Err(ServiceError::InvalidInput(format!(
                "Missing columns: {}",
                missing.join(", ")
            )));
        }

        let rows: Vec<ProductRow> = parse_rows(data)?;

        let mut fresh = Vec::new();
        for row in rows {
            let existing = product::Entity::find()
                .filter(product::Column::ProductName.eq(&row.product_name))
                .one(&*self.db)
                .await?;
            if existing.is_none() {
                fresh.push(product::ActiveModel {
                    product_name: Set(row.product_name),
                    supplier_id: Set(Some(row.supplier_id)),
                    category_id: Set(Some(row.category_id)),
                    quantity_per_unit: Set(Some(row.quantity_per_unit)),
                    unit_price: Set(row.unit_price),
                    units_in_stock: Set(row.units_in_stock),
                    units_on_order: Set(row.units_on_order),
                    reorder_level: Set(row.reorder_level),
                    discontinued: Set(row.discontinued != 0),
                    ..Default::default()
                });
            }
        }

        if fresh.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Data already exists or no rows matched expected columns".to_string(),
            ));
        }

        let inserted = fresh.len();
        let txn = self.db.begin().await?;
        product::Entity::insert_many(fresh).exec(&txn).await?;
        txn.commit().await?;

        info!(inserted, "imported products from CSV");
        Ok(inserted)
    }

    /// Loads customers with no existence check: every parsed row inserts, keyed by
    /// the user-supplied CustomerID. Re-uploading a file hits the primary-key
    /// constraint and the whole batch rolls back. The column set is validated
    /// against the declared schema first; anything missing or unknown is rejected
    /// by name.
    #[instrument(skip(self, data))]
    pub async fn import_customers(&self, data: &[u8]) -> Result<usize, ServiceError> {
        let headers = read_headers(data)?;

        let missing = missing_columns(&headers, CUSTOMER_COLUMNS);
        if !missing.is_empty() {
            return Err(ServiceError::UnprocessableEntity(format!(
                "Missing columns: {}",
                missing.join(", ")
            )));
        }
        let unknown = unknown_columns(&headers, CUSTOMER_COLUMNS);
        if !unknown.is_empty() {
            return Err(ServiceError::UnprocessableEntity(format!(
                "Unknown columns: {}",
                unknown.join(", ")
            )));
        }

        let rows: Vec<CustomerRow> = parse_rows(data)?;

        let models: Vec<customer::ActiveModel> = rows
            .into_iter()
            .map(|row| customer::ActiveModel {
                id: Set(row.customer_id),
                company_name: Set(row.company_name),
                contact_name: Set(Some(row.contact_name)),
                contact_title: Set(Some(row.contact_title)),
                address: Set(Some(row.address)),
                city: Set(Some(row.city)),
                postal_code: Set(Some(row.postal_code)),
                country: Set(Some(row.country)),
                phone: Set(Some(row.phone)),
                fax: Set(Some(row.fax)),
            })
            .collect();

        let inserted = models.len();
        if inserted > 0 {
            let txn = self.db.begin().await?;
            customer::Entity::insert_many(models).exec(&txn).await?;
            txn.commit().await?;
        }

        info!(inserted, "imported customers from CSV");
        Ok(inserted)
    }
}
