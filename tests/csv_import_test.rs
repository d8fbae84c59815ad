mod common;

use axum::http::StatusCode;
use common::{seed_category, seed_customer, seed_product, seed_shipper, seed_supplier, TestApp};
use northwind_api::entities::{customer, product, shipper};
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;

const SHIPPER_CSV: &str = "\
CompanyName,Phone
Speedy Express,(503) 555-9831
United Package,(503) 555-3199
";

const PRODUCT_CSV: &str = "\
ProductName,SupplierID,CategoryID,QuantityPerUnit,UnitPrice,UnitsInStock,UnitsOnOrder,ReorderLevel,Discontinued
Chai,1,1,10 boxes x 20 bags,18.00,39,0,10,0
Chang,1,1,24 - 12 oz bottles,19.00,17,40,25,1
";

const CUSTOMER_CSV: &str = "\
CustomerID,CompanyName,ContactName,ContactTitle,Address,City,PostalCode,Country,Phone,Fax
ALFKI,Alfreds Futterkiste,Maria Anders,Sales Representative,Obere Str. 57,Berlin,12209,Germany,030-0074321,030-0076545
ANATR,Ana Trujillo Emparedados,Ana Trujillo,Owner,Avda. 222,Mexico D.F.,05021,Mexico,(5) 555-4729,(5) 555-3745
";

#[tokio::test]
async fn shipper_upload_inserts_new_rows() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_csv("/Shipper/upload-data", "shippers.csv", SHIPPER_CSV)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "CSV file uploaded and shippers added successfully");

    let rows = shipper::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].company_name, "Speedy Express");
}

#[tokio::test]
async fn shipper_upload_skips_existing_company_phone_pairs() {
    let app = TestApp::new().await;
    seed_shipper(&app.db, "Speedy Express", "(503) 555-9831").await;

    let (status, _) = app
        .post_csv("/Shipper/upload-data", "shippers.csv", SHIPPER_CSV)
        .await;
    assert_eq!(status, StatusCode::OK);

    let rows = shipper::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn shipper_upload_with_nothing_new_is_rejected() {
    let app = TestApp::new().await;
    seed_shipper(&app.db, "Speedy Express", "(503) 555-9831").await;
    seed_shipper(&app.db, "United Package", "(503) 555-3199").await;

    let (status, body) = app
        .post_csv("/Shipper/upload-data", "shippers.csv", SHIPPER_CSV)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Data already exists"));
}

#[tokio::test]
async fn shipper_dedup_keys_on_both_company_and_phone() {
    let app = TestApp::new().await;
    // Same company, different phone: still a new row.
    seed_shipper(&app.db, "Speedy Express", "(000) 000-0000").await;

    let (status, _) = app
        .post_csv(
            "/Shipper/upload-data",
            "shippers.csv",
            "CompanyName,Phone\nSpeedy Express,(503) 555-9831\n",
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let rows = shipper::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn non_csv_filename_is_rejected_before_parsing() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post_csv("/Shipper/upload-data", "shippers.txt", SHIPPER_CSV)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "File is not a CSV");
}

#[tokio::test]
async fn shipper_upload_with_missing_columns_is_rejected() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post_csv(
            "/Shipper/upload-data",
            "shippers.csv",
            "CompanyName\nSpeedy Express\n",
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Phone"));
}

#[tokio::test]
async fn product_upload_inserts_and_maps_discontinued_flag() {
    let app = TestApp::new().await;
    // The CSV rows reference supplier 1 and category 1; the FKs must resolve.
    seed_supplier(&app.db, 1, "Exotic Liquids").await;
    seed_category(&app.db, "Beverages", "Soft drinks").await;

    let (status, body) = app
        .post_csv("/products/upload-data", "products.csv", PRODUCT_CSV)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "CSV file uploaded successfully");

    let rows = product::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].product_name, "Chai");
    assert!(!rows[0].discontinued);
    assert!(rows[1].discontinued);
    assert_eq!(rows[1].units_on_order, 40);
}

#[tokio::test]
async fn product_dedup_keys_on_name_only() {
    let app = TestApp::new().await;
    seed_supplier(&app.db, 1, "Exotic Liquids").await;
    seed_category(&app.db, "Beverages", "Soft drinks").await;
    // Existing Chai with different price: the upload row is still a duplicate.
    seed_product(&app.db, 1, "Chai", dec!(99.00), 5).await;

    let (status, _) = app
        .post_csv("/products/upload-data", "products.csv", PRODUCT_CSV)
        .await;
    assert_eq!(status, StatusCode::OK);

    let rows = product::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(rows.len(), 2);
    let chai = rows.iter().find(|p| p.product_name == "Chai").unwrap();
    assert_eq!(chai.unit_price, dec!(99));
}

#[tokio::test]
async fn customer_upload_reports_inserted_count() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_csv("/customers/upload-data", "customers.csv", CUSTOMER_CSV)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Customers imported successfully");
    assert_eq!(body["count"], 2);

    let rows = customer::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(rows.len(), 2);
    let alfki = rows.iter().find(|c| c.id == "ALFKI").unwrap();
    assert_eq!(alfki.company_name, "Alfreds Futterkiste");
    assert_eq!(alfki.postal_code.as_deref(), Some("12209"));
}

#[tokio::test]
async fn customer_upload_with_missing_columns_is_unprocessable() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post_csv(
            "/customers/upload-data",
            "customers.csv",
            "CustomerID,CompanyName\nALFKI,Alfreds Futterkiste\n",
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Missing columns:"));
    assert!(message.contains("ContactName"));
}

#[tokio::test]
async fn customer_upload_with_unknown_columns_is_unprocessable() {
    let app = TestApp::new().await;
    let csv = "\
CustomerID,CompanyName,ContactName,ContactTitle,Address,City,PostalCode,Country,Phone,Fax,LoyaltyTier
ALFKI,Alfreds Futterkiste,Maria Anders,Rep,Obere Str. 57,Berlin,12209,Germany,030,030,gold
";
    let (status, body) = app
        .post_csv("/customers/upload-data", "customers.csv", csv)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Unknown columns: LoyaltyTier");
}

#[tokio::test]
async fn customer_reupload_fails_wholesale_on_duplicate_ids() {
    let app = TestApp::new().await;
    seed_customer(&app.db, "ALFKI", "Alfreds Futterkiste").await;

    let (status, _) = app
        .post_csv("/customers/upload-data", "customers.csv", CUSTOMER_CSV)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // The batch rolls back as a whole: ANATR must not have slipped in.
    let rows = customer::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "ALFKI");
}

#[tokio::test]
async fn malformed_product_row_is_a_bad_request() {
    let app = TestApp::new().await;
    let csv = "\
ProductName,SupplierID,CategoryID,QuantityPerUnit,UnitPrice,UnitsInStock,UnitsOnOrder,ReorderLevel,Discontinued
Chai,not-a-number,1,10 boxes,18.00,39,0,10,0
";
    let (status, _) = app
        .post_csv("/products/upload-data", "products.csv", csv)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
