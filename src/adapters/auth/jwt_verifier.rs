//! JWT adapter for bearer token verification.
//!
//! Implements the `TokenVerifier` port with locally-issued HS256 tokens.
//! The verifier validates:
//!
//! - **Signature**: HMAC-SHA256 against the configured secret
//! - **Audience (aud)**: Must match the configured audience
//! - **Expiry (exp)**: Must be in the future
//!
//! The `sub` claim carries the user ID.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthenticatedUser, AuthError, UserId};
use crate::ports::TokenVerifier;

/// JWT claims carried by storefront tokens. Shared with the issuer.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    /// Subject: the user ID.
    pub(crate) sub: String,
    /// Audience.
    pub(crate) aud: String,
    /// Expiry (seconds since epoch).
    pub(crate) exp: i64,
}

/// HS256 implementation of TokenVerifier.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Creates a verifier from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&config.audience]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let user_id = UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(user_id))
    }
}
