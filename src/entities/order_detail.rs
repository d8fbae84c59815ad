use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One line item of an order.
///
/// Composite key (order, product). `unit_price` is the price at the time of order,
/// `discount` a fraction in [0, 1). Line items are immutable once created; no update
/// or delete surface exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = OrderDetail)]
#[sea_orm(table_name = "orderdetails")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,

    #[sea_orm(column_type = "Decimal(Some((12, 4)))")]
    pub unit_price: Decimal,

    pub quantity: i32,

    #[sea_orm(column_type = "Decimal(Some((5, 4)))")]
    pub discount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
