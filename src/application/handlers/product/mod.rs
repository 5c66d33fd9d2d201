//! Product command and query handlers.

mod create_product;
mod delete_product;
mod get_product;
mod list_products;
mod search_products;
mod update_product;

pub use create_product::{CreateProductCommand, CreateProductHandler};
pub use delete_product::{DeleteProductCommand, DeleteProductHandler};
pub use get_product::{GetProductHandler, GetProductQuery};
pub use list_products::ListProductsHandler;
pub use search_products::{SearchProductsHandler, SearchProductsQuery};
pub use update_product::{UpdateProductCommand, UpdateProductHandler};
