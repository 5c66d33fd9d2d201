//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the storefront domain.

mod auth;
mod errors;
mod ids;
mod price;
mod rating;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CartId, ProductId, UserId};
pub use price::Price;
pub use rating::Rating;
pub use timestamp::Timestamp;
