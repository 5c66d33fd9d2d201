//! HTTP adapter for cart endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CartAppState;
pub use routes::cart_routes;
