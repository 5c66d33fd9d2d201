//! PostgreSQL adapter implementations of the persistence ports.

mod cart_store;
mod product_catalog;
mod user_store;

pub use cart_store::PostgresCartStore;
pub use product_catalog::PostgresProductCatalog;
pub use user_store::PostgresUserStore;
