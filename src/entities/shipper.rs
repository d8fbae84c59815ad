use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shipping company. The natural key used for bulk-load deduplication is
/// (company_name, phone); there is no storage-level uniqueness constraint on it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Shipper)]
#[sea_orm(table_name = "shippers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub company_name: String,

    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
