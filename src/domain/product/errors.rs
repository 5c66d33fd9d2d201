//! Product-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProductId};

/// Product-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// Product was not found.
    NotFound(ProductId),
    /// No products matched (empty catalog or empty search result).
    NoneMatched,
    /// A product with the same name already exists.
    DuplicateName(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ProductError {
    pub fn not_found(id: ProductId) -> Self {
        ProductError::NotFound(id)
    }
    pub fn none_matched() -> Self {
        ProductError::NoneMatched
    }
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        ProductError::DuplicateName(name.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProductError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProductError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProductError::NotFound(_) | ProductError::NoneMatched => ErrorCode::ProductNotFound,
            ProductError::DuplicateName(_) => ErrorCode::DuplicateProductName,
            ProductError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProductError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ProductError::NotFound(id) => format!("Product not found: {}", id),
            ProductError::NoneMatched => "No products found".to_string(),
            ProductError::DuplicateName(name) => {
                format!("Product name already exists: {}", name)
            }
            ProductError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProductError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProductError {}

impl From<DomainError> for ProductError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateProductName => ProductError::DuplicateName(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ProductError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ProductError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn codes_map_to_error_kinds() {
        assert_eq!(
            ProductError::not_found(ProductId::new()).code(),
            ErrorCode::ProductNotFound
        );
        assert_eq!(
            ProductError::duplicate_name("Desk Lamp").code(),
            ErrorCode::DuplicateProductName
        );
        assert_eq!(
            ProductError::infrastructure("boom").code(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn domain_validation_converts_with_field() {
        let domain: DomainError = ValidationError::out_of_range("rating", 1, 5, 9).into();
        let err: ProductError = domain.into();
        assert!(matches!(err, ProductError::ValidationFailed { .. }));
    }

    #[test]
    fn infrastructure_display_names_the_failing_concern() {
        let err = ProductError::infrastructure("connection refused");
        assert_eq!(err.to_string(), "Storage error: connection refused");
    }
}
