//! JWT adapter for minting bearer tokens.
//!
//! Issues the HS256 tokens that `JwtTokenVerifier` accepts: same
//! secret, same audience, expiry from the configured TTL.

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthenticatedUser, AuthError, Timestamp};
use crate::ports::TokenIssuer;

use super::jwt_verifier::Claims;

/// HS256 implementation of TokenIssuer.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    audience: String,
    token_ttl_days: i64,
}

impl JwtTokenIssuer {
    /// Creates an issuer from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            audience: config.audience.clone(),
            token_ttl_days: config.token_ttl_days,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let expires_at = Timestamp::now().add_days(self.token_ttl_days);
        let claims = Claims {
            sub: user.user_id.as_str().to_string(),
            aud: self.audience.clone(),
            exp: expires_at.as_datetime().timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::ServiceUnavailable(format!("Failed to sign token: {}", e)))
    }
}
