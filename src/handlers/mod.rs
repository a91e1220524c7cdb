pub mod categories;
pub mod common;
pub mod contacts;
pub mod health;
pub mod suppliers;

use crate::db::DbPool;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<crate::services::SupplierCategoryService>,
    pub contacts: Arc<crate::services::SupplierContactService>,
    pub suppliers: Arc<crate::services::SupplierService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            categories: Arc::new(crate::services::SupplierCategoryService::new(
                db_pool.clone(),
            )),
            contacts: Arc::new(crate::services::SupplierContactService::new(
                db_pool.clone(),
            )),
            suppliers: Arc::new(crate::services::SupplierService::new(db_pool)),
        }
    }
}
