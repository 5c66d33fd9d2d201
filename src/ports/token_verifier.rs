//! Token verifier port.
//!
//! Keeps the auth middleware provider-agnostic: whether tokens come from
//! a local HS256 signer or an external identity provider, the middleware
//! does not change.

use crate::domain::foundation::{AuthenticatedUser, AuthError};
use async_trait::async_trait;

/// Verifies a bearer token and resolves the authenticated user.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Validate a token, returning the user context on success.
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn token_verifier_is_object_safe() {
        fn _accepts_dyn(_verifier: &dyn TokenVerifier) {}
    }
}
