//! HTTP DTOs (Data Transfer Objects) for cart endpoints.

use crate::application::handlers::cart::{CartLineView, CartView};
use crate::domain::cart::Cart;
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to add quantity of a product to the cart.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Request to set a line's quantity absolutely. Zero deletes the line.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A cart line as stored: product reference and quantity.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineResponse {
    pub product_id: String,
    pub quantity: u32,
}

/// The cart aggregate as returned by mutation endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub id: String,
    pub items: Vec<CartLineResponse>,
    /// Number of distinct lines.
    pub total_items: u32,
    /// Sum of quantity times unit price over all lines, in cents.
    pub total_price_cents: i64,
    /// When the cart was last updated (ISO 8601).
    pub updated_at: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            id: cart.id().to_string(),
            items: cart
                .items()
                .iter()
                .map(|line| CartLineResponse {
                    product_id: line.product_id().to_string(),
                    quantity: line.quantity(),
                })
                .collect(),
            total_items: cart.total_items(),
            total_price_cents: cart.total_price().as_cents(),
            updated_at: cart.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// A cart line joined with its product, as returned by the read endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineViewResponse {
    pub product_id: String,
    pub name: String,
    pub image_url: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub line_total_cents: i64,
}

impl From<&CartLineView> for CartLineViewResponse {
    fn from(line: &CartLineView) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.name.clone(),
            image_url: line.image_url.clone(),
            unit_price_cents: line.unit_price.as_cents(),
            quantity: line.quantity,
            line_total_cents: line.line_total.as_cents(),
        }
    }
}

/// The expanded cart view returned by the read endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CartViewResponse {
    pub id: String,
    pub items: Vec<CartLineViewResponse>,
    pub total_items: u32,
    pub total_price_cents: i64,
    pub updated_at: String,
}

impl From<&CartView> for CartViewResponse {
    fn from(view: &CartView) -> Self {
        Self {
            id: view.id.to_string(),
            items: view.items.iter().map(CartLineViewResponse::from).collect(),
            total_items: view.total_items,
            total_price_cents: view.total_price.as_cents(),
            updated_at: view.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
