//! HTTP DTOs (Data Transfer Objects) for catalog endpoints.
//!
//! These types define the JSON request/response structure for the product
//! API. They serve as the boundary between HTTP and the application layer.

use crate::domain::product::{Category, Product};
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Category name (electronics, clothing, food, books, furniture).
    pub category: String,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Whole stars, 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub free_delivery: bool,
}

/// Request to partially update a product. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub free_delivery: Option<bool>,
}

/// Query string parameters for catalog search.
///
/// All parameters are optional, but at least one must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchProductsParams {
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring match on the name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub min_price_cents: Option<i64>,
    #[serde(default)]
    pub max_price_cents: Option<i64>,
    #[serde(default)]
    pub min_rating: Option<u8>,
    #[serde(default)]
    pub max_rating: Option<u8>,
    #[serde(default)]
    pub free_delivery: Option<bool>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A product as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: Category,
    pub price_cents: i64,
    pub rating: u8,
    pub free_delivery: bool,
    /// When the product was created (ISO 8601).
    pub created_at: String,
    /// When the product was last updated (ISO 8601).
    pub updated_at: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            image_url: product.image_url().to_string(),
            category: product.category(),
            price_cents: product.price().as_cents(),
            rating: product.rating().value(),
            free_delivery: product.free_delivery(),
            created_at: product.created_at().as_datetime().to_rfc3339(),
            updated_at: product.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Response for product collections.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub count: usize,
}

impl ProductListResponse {
    pub fn new(products: Vec<Product>) -> Self {
        let products: Vec<ProductResponse> = products.iter().map(ProductResponse::from).collect();
        Self {
            count: products.len(),
            products,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Price, ProductId, Rating};

    #[test]
    fn product_response_carries_all_fields() {
        let product = Product::new(
            ProductId::new(),
            "Desk Lamp".to_string(),
            "Warm light".to_string(),
            "https://img.example.com/lamp.png".to_string(),
            Category::Furniture,
            Price::from_cents(2500).unwrap(),
            Rating::try_from_u8(4).unwrap(),
            true,
        )
        .unwrap();

        let response = ProductResponse::from(&product);
        assert_eq!(response.name, "Desk Lamp");
        assert_eq!(response.price_cents, 2500);
        assert_eq!(response.rating, 4);
        assert!(response.free_delivery);
    }

    #[test]
    fn update_request_defaults_to_all_none() {
        let request: UpdateProductRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.price_cents.is_none());
    }
}
