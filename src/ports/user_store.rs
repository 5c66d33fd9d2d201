//! User store port.
//!
//! Defines the contract for persisting user accounts. Emails are unique
//! case-insensitively.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

/// Persistence port for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by ID. Returns `None` if absent.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by email, compared case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All registered users.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a new user.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if the email is already registered
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, user: &User) -> Result<(), DomainError>;

    /// Persist the full state of an existing user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user no longer exists
    /// - `DuplicateEmail` if the new email is already registered
    /// - `DatabaseError` on persistence failure
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Delete a user by ID.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if no such user exists
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
