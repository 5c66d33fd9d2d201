//! Cart command and query handlers.

mod add_item;
mod clear_cart;
mod get_cart;
mod remove_item;
mod update_item;

pub use add_item::{AddItemCommand, AddItemHandler};
pub use clear_cart::{ClearCartCommand, ClearCartHandler};
pub use get_cart::{CartLineView, CartView, GetCartHandler, GetCartQuery};
pub use remove_item::{RemoveItemCommand, RemoveItemHandler};
pub use update_item::{UpdateItemCommand, UpdateItemHandler};
