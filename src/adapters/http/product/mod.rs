//! HTTP adapter for catalog endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ProductAppState;
pub use routes::product_routes;
