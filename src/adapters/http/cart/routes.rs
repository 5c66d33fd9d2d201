//! Axum router configuration for cart endpoints.
//!
//! The auth middleware is layered by the caller (see `main.rs`); every
//! handler here enforces authentication via `RequireAuth`.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{add_item, clear_cart, get_cart, remove_item, update_item, CartAppState};

/// Create the cart API router.
///
/// # Routes (all require authentication)
///
/// - `GET /` - Fetch the user's cart, lines expanded with product data
/// - `POST /items` - Add quantity of a product (accumulates)
/// - `PUT /items` - Set a line's quantity absolutely (zero deletes)
/// - `DELETE /items/:product_id` - Delete one line
/// - `DELETE /` - Empty the cart
pub fn cart_routes() -> Router<CartAppState> {
    Router::new()
        .route("/", get(get_cart))
        .route("/", delete(clear_cart))
        .route("/items", post(add_item))
        .route("/items", put(update_item))
        .route("/items/:product_id", delete(remove_item))
}
