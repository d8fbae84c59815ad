use crate::db::DbPool;
use crate::entities::{category, product};
use crate::errors::ServiceError;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

/// Product catalog queries and category creation.
pub struct CatalogService {
    db: Arc<DbPool>,
}

/// Result of a product name search.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSearchResult {
    pub count: usize,
    pub names: Vec<String>,
    pub records: Vec<product::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockRecord {
    pub id: i32,
    pub product_name: String,
    pub units_in_stock: i32,
}

/// Full-table stock projection plus the units-in-stock total.
#[derive(Debug, Serialize, ToSchema)]
pub struct StockSummary {
    pub total_stock: i64,
    pub products: Vec<StockRecord>,
}

impl CatalogService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Case-insensitive substring search on product name. An empty or absent term
    /// returns the whole catalog.
    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        term: Option<&str>,
    ) -> Result<ProductSearchResult, ServiceError> {
        let mut query = product::Entity::find();

        if let Some(term) = term.filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", term.to_lowercase());
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((
                    product::Entity,
                    product::Column::ProductName,
                ))))
                .like(pattern),
            );
        }

        let records = query
            .order_by_asc(product::Column::Id)
            .all(&*self.db)
            .await?;
        let names = records.iter().map(|p| p.product_name.clone()).collect();

        Ok(ProductSearchResult {
            count: records.len(),
            names,
            records,
        })
    }

    /// Every product's id, name and units-in-stock, plus the integer total across
    /// the whole table. No filtering, no currency arithmetic.
    #[instrument(skip(self))]
    pub async fn stock_summary(&self) -> Result<StockSummary, ServiceError> {
        let rows: Vec<(i32, String, i32)> = product::Entity::find()
            .select_only()
            .column(product::Column::Id)
            .column(product::Column::ProductName)
            .column(product::Column::UnitsInStock)
            .order_by_asc(product::Column::Id)
            .into_tuple()
            .all(&*self.db)
            .await?;

        let total_stock = rows.iter().map(|r| i64::from(r.2)).sum();
        let products = rows
            .into_iter()
            .map(|(id, product_name, units_in_stock)| StockRecord {
                id,
                product_name,
                units_in_stock,
            })
            .collect();

        Ok(StockSummary {
            total_stock,
            products,
        })
    }

    /// Creates a category. Both fields are required; a duplicate name (exact match)
    /// is a conflict. The existence check and the insert are two round trips, so
    /// concurrent identical requests can still race in a duplicate.
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        name: &str,
        description: &str,
    ) -> Result<category::Model, ServiceError> {
        if name.is_empty() || description.is_empty() {
            return Err(ServiceError::InvalidInput(
                "All fields must be provided".to_string(),
            ));
        }

        let existing = category::Entity::find()
            .filter(category::Column::CategoryName.eq(name))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(format!(
                "Category '{}' already exists",
                name
            )));
        }

        let created = category::ActiveModel {
            category_name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(category_id = created.id, "created category");
        Ok(created)
    }
}
