//! Cart-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProductId, UserId};

/// Cart-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// No cart exists for the user.
    CartNotFound(UserId),
    /// The product does not exist in the catalog.
    ProductNotFound(ProductId),
    /// The product has no line in the cart.
    NotInCart(ProductId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Concurrent mutation detected on save.
    Conflict,
    /// Infrastructure error.
    Infrastructure(String),
}

impl CartError {
    pub fn cart_not_found(user_id: UserId) -> Self {
        CartError::CartNotFound(user_id)
    }
    pub fn product_not_found(product_id: ProductId) -> Self {
        CartError::ProductNotFound(product_id)
    }
    pub fn not_in_cart(product_id: ProductId) -> Self {
        CartError::NotInCart(product_id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CartError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn conflict() -> Self {
        CartError::Conflict
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CartError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CartError::CartNotFound(_) => ErrorCode::CartNotFound,
            CartError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            CartError::NotInCart(_) => ErrorCode::ProductNotInCart,
            CartError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CartError::Conflict => ErrorCode::CartConflict,
            CartError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CartError::CartNotFound(user_id) => format!("Cart not found for user: {}", user_id),
            CartError::ProductNotFound(id) => format!("Product not found: {}", id),
            CartError::NotInCart(id) => format!("Product not in cart: {}", id),
            CartError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CartError::Conflict => "Cart was modified concurrently, retry the request".to_string(),
            CartError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CartError {}

impl From<DomainError> for CartError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CartConflict => CartError::Conflict,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => CartError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => CartError::Infrastructure(err.to_string()),
        }
    }
}
