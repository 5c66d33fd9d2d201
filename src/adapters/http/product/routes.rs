//! Axum router configuration for catalog endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_product, delete_product, get_product, list_products, search_products, update_product,
    ProductAppState,
};

/// Create the catalog API router.
///
/// # Routes
///
/// - `POST /` - Create a product
/// - `GET /` - List the whole catalog
/// - `GET /search` - Search with query parameters
/// - `GET /:id` - Fetch one product
/// - `PUT /:id` - Partially update a product
/// - `DELETE /:id` - Delete a product
///
/// The `/search` route is registered before `/:id` so the literal
/// segment wins over the parameter.
pub fn product_routes() -> Router<ProductAppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/:id", get(get_product))
        .route("/:id", put(update_product))
        .route("/:id", delete(delete_product))
}
