/*!
 * Service layer: one service per aggregate, each owning a handle to the
 * connection pool. Services speak DTOs outward and entities inward; the
 * HTTP layer never touches entity types directly.
 */

pub mod categories;
pub mod contacts;
pub mod suppliers;

pub use categories::SupplierCategoryService;
pub use contacts::SupplierContactService;
pub use suppliers::SupplierService;
