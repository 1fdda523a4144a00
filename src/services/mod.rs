mod errors;
mod product_service;
mod product_store;

pub use errors::{ProductError, DELETED_MESSAGE, NOT_FOUND_MESSAGE};
pub use product_service::ProductService;
pub use product_store::{InMemoryProductStore, PgProductStore, ProductStore};
