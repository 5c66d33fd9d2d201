//! HTTP handlers for cart endpoints.
//!
//! All cart routes require authentication; the cart is always the
//! authenticated user's own.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::cart::{
    AddItemCommand, AddItemHandler, ClearCartCommand, ClearCartHandler, GetCartHandler,
    GetCartQuery, RemoveItemCommand, RemoveItemHandler, UpdateItemCommand, UpdateItemHandler,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::cart::CartError;
use crate::domain::foundation::ProductId;
use crate::ports::{CartStore, ProductCatalog};

use super::dto::{
    AddItemRequest, CartResponse, CartViewResponse, ErrorResponse, UpdateItemRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the cart routes.
#[derive(Clone)]
pub struct CartAppState {
    pub store: Arc<dyn CartStore>,
    pub catalog: Arc<dyn ProductCatalog>,
}

impl CartAppState {
    /// Create handlers on demand from the shared state.
    pub fn get_handler(&self) -> GetCartHandler {
        GetCartHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn add_handler(&self) -> AddItemHandler {
        AddItemHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn update_handler(&self) -> UpdateItemHandler {
        UpdateItemHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn remove_handler(&self) -> RemoveItemHandler {
        RemoveItemHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn clear_handler(&self) -> ClearCartHandler {
        ClearCartHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/cart - Fetch the authenticated user's cart, expanded
pub async fn get_cart(
    State(state): State<CartAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, CartApiError> {
    let view = state
        .get_handler()
        .handle(GetCartQuery {
            user_id: user.user_id,
        })
        .await?;
    Ok(Json(CartViewResponse::from(&view)))
}

/// POST /api/cart/items - Add quantity of a product
pub async fn add_item(
    State(state): State<CartAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<AddItemRequest>,
) -> Result<impl IntoResponse, CartApiError> {
    let cart = state
        .add_handler()
        .handle(AddItemCommand {
            user_id: user.user_id,
            product_id: parse_product_id(&request.product_id)?,
            quantity: request.quantity,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CartResponse::from(&cart))))
}

/// PUT /api/cart/items - Set a line's quantity absolutely
pub async fn update_item(
    State(state): State<CartAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<UpdateItemRequest>,
) -> Result<impl IntoResponse, CartApiError> {
    let cart = state
        .update_handler()
        .handle(UpdateItemCommand {
            user_id: user.user_id,
            product_id: parse_product_id(&request.product_id)?,
            quantity: request.quantity,
        })
        .await?;
    Ok(Json(CartResponse::from(&cart)))
}

/// DELETE /api/cart/items/:product_id - Delete one line
pub async fn remove_item(
    State(state): State<CartAppState>,
    RequireAuth(user): RequireAuth,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, CartApiError> {
    let cart = state
        .remove_handler()
        .handle(RemoveItemCommand {
            user_id: user.user_id,
            product_id: parse_product_id(&product_id)?,
        })
        .await?;
    Ok(Json(CartResponse::from(&cart)))
}

/// DELETE /api/cart - Empty the cart
pub async fn clear_cart(
    State(state): State<CartAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, CartApiError> {
    let cart = state
        .clear_handler()
        .handle(ClearCartCommand {
            user_id: user.user_id,
        })
        .await?;
    Ok(Json(CartResponse::from(&cart)))
}

fn parse_product_id(raw: &str) -> Result<ProductId, CartApiError> {
    raw.parse()
        .map_err(|_| CartError::validation("product_id", "Malformed product ID").into())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts cart errors to HTTP responses.
pub struct CartApiError(CartError);

impl From<CartError> for CartApiError {
    fn from(err: CartError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CartApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            CartError::CartNotFound(_) => (StatusCode::NOT_FOUND, "CART_NOT_FOUND"),
            CartError::ProductNotFound(_) => (StatusCode::NOT_FOUND, "PRODUCT_NOT_FOUND"),
            CartError::NotInCart(_) => (StatusCode::NOT_FOUND, "PRODUCT_NOT_IN_CART"),
            CartError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            CartError::Conflict => (StatusCode::CONFLICT, "CART_CONFLICT"),
            CartError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
