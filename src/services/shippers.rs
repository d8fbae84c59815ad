use crate::db::DbPool;
use crate::entities::shipper;
use crate::errors::ServiceError;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};
use std::sync::Arc;
use tracing::instrument;

/// Shipper lookups.
pub struct ShipperService {
    db: Arc<DbPool>,
}

impl ShipperService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list_shippers(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<shipper::Model>, ServiceError> {
        let shippers = shipper::Entity::find()
            .order_by_asc(shipper::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await?;
        Ok(shippers)
    }

    #[instrument(skip(self))]
    pub async fn get_shipper(&self, id: i32) -> Result<shipper::Model, ServiceError> {
        shipper::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Shipper {} not found", id)))
    }
}
