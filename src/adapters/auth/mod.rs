//! Authentication adapters.
//!
//! - `jwt_verifier` - HS256 verification of bearer tokens
//! - `jwt_issuer` - HS256 minting of bearer tokens (login)
//! - `password` - Argon2id password hashing
//! - `mock` - Test verifier that doesn't require real tokens

mod jwt_issuer;
mod jwt_verifier;
mod mock;
mod password;

pub use jwt_issuer::JwtTokenIssuer;
pub use jwt_verifier::JwtTokenVerifier;
pub use mock::MockTokenVerifier;
pub use password::Argon2PasswordHasher;
