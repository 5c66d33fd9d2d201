//! Cart store port.
//!
//! Defines the contract for persisting and retrieving Cart aggregates.
//! One cart document per user, unique by user ID.

use crate::domain::cart::Cart;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Persistence port for the Cart aggregate.
///
/// Implementations must ensure:
/// - At most one cart per user
/// - Line order preserved across saves
/// - `save` checks the aggregate's version and fails with `CartConflict`
///   when the stored cart was modified concurrently
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Find the cart owned by a user.
    ///
    /// Returns `None` if the user has no cart yet.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, DomainError>;

    /// Persist a newly opened cart.
    ///
    /// # Errors
    ///
    /// - `CartConflict` if a cart already exists for the user
    /// - `DatabaseError` on persistence failure
    async fn create(&self, cart: &Cart) -> Result<(), DomainError>;

    /// Persist the full state of an existing cart.
    ///
    /// The write is conditional on the cart's version matching the
    /// stored version; the stored version is bumped on success.
    ///
    /// # Errors
    ///
    /// - `CartConflict` if the stored version does not match
    /// - `CartNotFound` if the cart row no longer exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, cart: &Cart) -> Result<(), DomainError>;
}
