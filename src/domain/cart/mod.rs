//! Cart module - per-user shopping cart aggregate.
//!
//! The cart keeps its line items and derived totals (`total_items`,
//! `total_price`) consistent under add/update/remove/clear mutations.

mod aggregate;
mod errors;

pub use aggregate::{Cart, CartLine, LineChange};
pub use errors::CartError;
