pub mod categories;
pub mod common;
pub mod imports;
pub mod orders;
pub mod products;
pub mod revenue;
pub mod shippers;

use crate::db::DbPool;
use crate::services::{
    catalog::CatalogService, imports::CsvImportService, invoices::InvoiceService,
    revenue::RevenueService, shippers::ShipperService,
};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
    pub invoices: Arc<InvoiceService>,
    pub revenue: Arc<RevenueService>,
    pub imports: Arc<CsvImportService>,
    pub shippers: Arc<ShipperService>,
}

impl AppServices {
    /// Builds the service container over one shared connection pool.
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(db.clone())),
            invoices: Arc::new(InvoiceService::new(db.clone())),
            revenue: Arc::new(RevenueService::new(db.clone())),
            imports: Arc::new(CsvImportService::new(db.clone())),
            shippers: Arc::new(ShipperService::new(db)),
        }
    }
}
