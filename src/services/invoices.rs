use crate::db::DbPool;
use crate::entities::{order, order_detail, product};
use crate::errors::ServiceError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

/// Invoice assembly and order-detail listing.
pub struct InvoiceService {
    db: Arc<DbPool>,
}

/// One invoice line: a product within an order.
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceLine {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub discount: Decimal,
}

/// Assembled invoice for a single order.
#[derive(Debug, Serialize, ToSchema)]
pub struct Invoice {
    /// Order date truncated to its calendar-date component
    pub order_date: NaiveDate,
    pub customer_id: Option<String>,
    /// Number of line items
    pub quantity: usize,
    pub products: Vec<InvoiceLine>,
    /// Sum of `quantity * unit_price * (1 - discount)` over all lines
    pub total_order_value: Decimal,
}

fn line_total(quantity: i32, unit_price: Decimal, discount: Decimal) -> Decimal {
    unit_price * Decimal::from(quantity) * (Decimal::ONE - discount)
}

impl InvoiceService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Builds the invoice for one order.
    ///
    /// An id outside the known set fails not-found with the min/max known ids as a
    /// hint. A known id whose join comes back empty (race with a concurrent delete)
    /// is also treated as not-found.
    #[instrument(skip(self))]
    pub async fn build_invoice(&self, order_id: i32) -> Result<Invoice, ServiceError> {
        let known_ids: Vec<i32> = order::Entity::find()
            .select_only()
            .column(order::Column::Id)
            .order_by_asc(order::Column::Id)
            .into_tuple()
            .all(&*self.db)
            .await?;

        if !known_ids.contains(&order_id) {
            let hint = match (known_ids.first(), known_ids.last()) {
                (Some(min), Some(max)) => {
                    format!("known OrderIDs range from {} to {}", min, max)
                }
                _ => "no orders exist".to_string(),
            };
            return Err(ServiceError::NotFound(format!(
                "OrderID {} not found; {}",
                order_id, hint
            )));
        }

        let header = order::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("OrderID {} not found", order_id))
            })?;

        let rows = order_detail::Entity::find()
            .filter(order_detail::Column::OrderId.eq(order_id))
            .find_also_related(product::Entity)
            .all(&*self.db)
            .await?;

        if rows.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "OrderID {} has no line items",
                order_id
            )));
        }

        let mut products = Vec::with_capacity(rows.len());
        let mut total_order_value = Decimal::ZERO;
        for (detail, item) in rows {
            let item = item.ok_or_else(|| {
                ServiceError::InternalError(format!(
                    "order {} references a missing product {}",
                    detail.order_id, detail.product_id
                ))
            })?;

            total_order_value += line_total(detail.quantity, detail.unit_price, detail.discount);
            products.push(InvoiceLine {
                product_name: item.product_name,
                quantity: detail.quantity,
                unit_price: detail.unit_price,
                discount: detail.discount,
            });
        }

        Ok(Invoice {
            order_date: header.order_date,
            customer_id: header.customer_id,
            quantity: products.len(),
            products,
            total_order_value,
        })
    }

    /// Plain offset/limit listing of order detail rows.
    #[instrument(skip(self))]
    pub async fn list_order_details(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<order_detail::Model>, ServiceError> {
        let rows = order_detail::Entity::find()
            .order_by_asc(order_detail::Column::OrderId)
            .order_by_asc(order_detail::Column::ProductId)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await?;
        Ok(rows)
    }
}
