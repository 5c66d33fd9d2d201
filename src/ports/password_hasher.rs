//! Password hashing port.
//!
//! Keeps the hashing scheme out of the application layer; handlers see
//! opaque hash strings only.

use crate::domain::foundation::DomainError;

/// Port for hashing and verifying passwords.
///
/// Hashing is pure computation, so the port is synchronous.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password for storage.
    fn hash(&self, raw: &str) -> Result<String, DomainError>;

    /// Check a raw password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; `Err` is reserved for unreadable
    /// stored hashes.
    fn verify(&self, raw: &str, hash: &str) -> Result<bool, DomainError>;
}
