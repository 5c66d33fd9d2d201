//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `cart` - Per-user cart aggregate and derived-totals consistency
//! - `product` - Catalog entity, categories, and search filtering
//! - `user` - Accounts and credentials policy

pub mod cart;
pub mod foundation;
pub mod product;
pub mod user;
