use crate::db::DbPool;
use crate::entities::{order, order_detail};
use crate::errors::ServiceError;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

/// Revenue report granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenuePeriod {
    Daily,
    Monthly,
    Yearly,
}

impl FromStr for RevenuePeriod {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(ServiceError::InvalidInput(
                "Invalid time period. Allowed values: daily, monthly, yearly".to_string(),
            )),
        }
    }
}

/// One aggregation bucket. The shape depends on the requested granularity.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RevenueBucket {
    Daily {
        date: NaiveDate,
        revenue: Decimal,
    },
    Monthly {
        year: i32,
        month: u32,
        revenue: Decimal,
    },
    Yearly {
        year: i32,
        revenue: Decimal,
    },
}

/// Revenue aggregation over order line items.
pub struct RevenueService {
    db: Arc<DbPool>,
}

fn line_revenue(detail: &order_detail::Model) -> Decimal {
    detail.unit_price * Decimal::from(detail.quantity) * (Decimal::ONE - detail.discount)
}

/// Groups (order date, line revenue) pairs into buckets, ascending by bucket key.
/// BTreeMap keys give the required ordering for free.
fn bucket_revenue(rows: &[(NaiveDate, Decimal)], period: RevenuePeriod) -> Vec<RevenueBucket> {
    match period {
        RevenuePeriod::Daily => {
            let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
            for (date, revenue) in rows {
                *buckets.entry(*date).or_insert(Decimal::ZERO) += *revenue;
            }
            buckets
                .into_iter()
                .map(|(date, revenue)| RevenueBucket::Daily { date, revenue })
                .collect()
        }
        RevenuePeriod::Monthly => {
            let mut buckets: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
            for (date, revenue) in rows {
                *buckets
                    .entry((date.year(), date.month()))
                    .or_insert(Decimal::ZERO) += *revenue;
            }
            buckets
                .into_iter()
                .map(|((year, month), revenue)| RevenueBucket::Monthly {
                    year,
                    month,
                    revenue,
                })
                .collect()
        }
        RevenuePeriod::Yearly => {
            let mut buckets: BTreeMap<i32, Decimal> = BTreeMap::new();
            for (date, revenue) in rows {
                *buckets.entry(date.year()).or_insert(Decimal::ZERO) += *revenue;
            }
            buckets
                .into_iter()
                .map(|(year, revenue)| RevenueBucket::Yearly { year, revenue })
                .collect()
        }
    }
}

impl RevenueService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Revenue per bucket at the requested granularity, ascending by bucket key.
    ///
    /// Line revenue is `unit_price * quantity * (1 - discount)` in decimal
    /// arithmetic; a line falls into the bucket of its parent order's date. The
    /// full result set is materialized in memory, not streamed.
    #[instrument(skip(self))]
    pub async fn revenue_by_period(
        &self,
        period: RevenuePeriod,
    ) -> Result<Vec<RevenueBucket>, ServiceError> {
        let orders_with_details = order::Entity::find()
            .find_with_related(order_detail::Entity)
            .all(&*self.db)
            .await?;

        let mut rows = Vec::new();
        for (header, details) in &orders_with_details {
            for detail in details {
                rows.push((header.order_date, line_revenue(detail)));
            }
        }

        Ok(bucket_revenue(&rows, period))
    }
}
