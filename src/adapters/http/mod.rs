//! HTTP adapters - axum routers, handlers, and DTOs.

pub mod cart;
pub mod middleware;
pub mod product;
pub mod user;
