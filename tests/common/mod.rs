#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use northwind_api::{
    app_router,
    config::AppConfig,
    db::{self, DbConfig, DbPool},
    entities::{category, customer, order, order_detail, product, shipper, supplier},
    handlers::AppServices,
    AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

/// Helper harness: the real application router backed by an in-memory SQLite
/// database. One connection keeps the in-memory schema alive for the whole test.
pub struct TestApp {
    pub router: Router,
    pub db: Arc<DbPool>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_cfg = DbConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let pool = db::establish_connection_with_config(&db_cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db = Arc::new(pool);
        let services = AppServices::new(db.clone());
        let state = Arc::new(AppState {
            db: db.clone(),
            config: AppConfig::default(),
            services,
        });

        Self {
            router: app_router(state),
            db,
        }
    }

    async fn request(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("request failed");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("invalid request"),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("invalid request"),
        )
        .await
    }

    /// POSTs a multipart upload carrying one CSV file part.
    pub async fn post_csv(&self, uri: &str, filename: &str, csv: &str) -> (StatusCode, Value) {
        let boundary = "northwind-test-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: text/csv\r\n\r\n{c}\r\n--{b}--\r\n",
            b = boundary,
            f = filename,
            c = csv
        );
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .expect("invalid request"),
        )
        .await
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Parses a JSON value that carries a decimal as either a string or a number.
pub fn decimal(v: &Value) -> Decimal {
    match v {
        Value::String(s) => Decimal::from_str(s).expect("invalid decimal string"),
        Value::Number(n) => Decimal::from_str(&n.to_string()).expect("invalid decimal number"),
        other => panic!("expected a decimal value, got {:?}", other),
    }
}

pub async fn seed_customer(db: &DbPool, id: &str, company: &str) {
    customer::ActiveModel {
        id: Set(id.to_string()),
        company_name: Set(company.to_string()),
        contact_name: Set(None),
        contact_title: Set(None),
        address: Set(None),
        city: Set(None),
        postal_code: Set(None),
        country: Set(None),
        phone: Set(None),
        fax: Set(None),
    }
    .insert(db)
    .await
    .expect("failed to seed customer");
}

pub async fn seed_order(db: &DbPool, id: i32, customer_id: &str, order_date: NaiveDate) {
    order::ActiveModel {
        id: Set(id),
        customer_id: Set(Some(customer_id.to_string())),
        employee_id: Set(None),
        order_date: Set(order_date),
    }
    .insert(db)
    .await
    .expect("failed to seed order");
}

pub async fn seed_product(db: &DbPool, id: i32, name: &str, unit_price: Decimal, in_stock: i32) {
    product::ActiveModel {
        id: Set(id),
        product_name: Set(name.to_string()),
        supplier_id: Set(None),
        category_id: Set(None),
        quantity_per_unit: Set(None),
        unit_price: Set(unit_price),
        units_in_stock: Set(in_stock),
        units_on_order: Set(0),
        reorder_level: Set(0),
        discontinued: Set(false),
    }
    .insert(db)
    .await
    .expect("failed to seed product");
}

pub async fn seed_order_detail(
    db: &DbPool,
    order_id: i32,
    product_id: i32,
    unit_price: Decimal,
    quantity: i32,
    discount: Decimal,
) {
    order_detail::ActiveModel {
        order_id: Set(order_id),
        product_id: Set(product_id),
        unit_price: Set(unit_price),
        quantity: Set(quantity),
        discount: Set(discount),
    }
    .insert(db)
    .await
    .expect("failed to seed order detail");
}

pub async fn seed_shipper(db: &DbPool, company: &str, phone: &str) {
    shipper::ActiveModel {
        company_name: Set(company.to_string()),
        phone: Set(phone.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed shipper");
}

pub async fn seed_supplier(db: &DbPool, id: i32, company: &str) {
    supplier::ActiveModel {
        id: Set(id),
        company_name: Set(company.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed supplier");
}

pub async fn seed_category(db: &DbPool, name: &str, description: &str) {
    category::ActiveModel {
        category_name: Set(name.to_string()),
        description: Set(Some(description.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed category");
}
