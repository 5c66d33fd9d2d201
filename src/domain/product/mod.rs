//! Product module - catalog entity, categories, and search filtering.

mod category;
mod errors;
mod filter;
mod product;

pub use category::Category;
pub use errors::ProductError;
pub use filter::ProductFilter;
pub use product::{Product, ProductUpdate, MAX_NAME_LENGTH};
