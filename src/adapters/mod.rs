//! Adapter implementations of the ports.
//!
//! - `auth` - Token verification (JWT and mock)
//! - `http` - Axum routers, handlers, and DTOs
//! - `postgres` - Persistence adapters backed by PostgreSQL

pub mod auth;
pub mod http;
pub mod postgres;
