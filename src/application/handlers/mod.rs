//! Command and query handlers, one module per aggregate.

pub mod cart;
pub mod product;
pub mod user;
