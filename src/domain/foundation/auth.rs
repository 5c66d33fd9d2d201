//! Authentication primitives shared between middleware and handlers.

use thiserror::Error;

use super::UserId;

/// Authenticated user context extracted from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user context.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Errors produced by token verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}
