//! Token issuing port.
//!
//! Counterpart to `TokenVerifier`: login mints the bearer tokens the
//! cart endpoints later verify.

use crate::domain::foundation::{AuthenticatedUser, AuthError};

/// Port for minting bearer tokens.
pub trait TokenIssuer: Send + Sync {
    /// Issue a token whose subject is the given user.
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError>;
}
