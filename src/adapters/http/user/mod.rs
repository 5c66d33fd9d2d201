//! HTTP adapter for user endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::UserAppState;
pub use routes::{protected_user_routes, user_routes};
