//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (HS256 bearer tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for signing and verifying tokens
    pub jwt_secret: String,

    /// Expected token audience
    #[serde(default = "default_audience")]
    pub audience: String,

    /// How long issued tokens stay valid, in days
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.jwt_secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if !(1..=90).contains(&self.token_ttl_days) {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

fn default_audience() -> String {
    "storefront".to_string()
}

fn default_token_ttl_days() -> i64 {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            audience: default_audience(),
            token_ttl_days: default_token_ttl_days(),
        }
    }

    #[test]
    fn test_validation_missing_secret() {
        assert!(config("").validate().is_err());
    }

    #[test]
    fn test_validation_short_secret() {
        assert!(config("too-short").validate().is_err());
    }

    #[test]
    fn test_validation_valid_secret() {
        assert!(config(&"x".repeat(32)).validate().is_ok());
    }

    #[test]
    fn test_validation_token_ttl_bounds() {
        let mut cfg = config(&"x".repeat(32));
        cfg.token_ttl_days = 0;
        assert!(cfg.validate().is_err());
        cfg.token_ttl_days = 91;
        assert!(cfg.validate().is_err());
        cfg.token_ttl_days = 30;
        assert!(cfg.validate().is_ok());
    }
}
