//! Axum router configuration for user endpoints.
//!
//! Registration and login are public. The account management routes are
//! a separate router so the caller (see `main.rs`) can layer the auth
//! middleware on only those.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    delete_user, list_users, login_user, register_user, update_user, UserAppState,
};

/// Create the public user API router.
///
/// # Routes
///
/// - `POST /register` - Create an account
/// - `POST /login` - Exchange credentials for a bearer token
pub fn user_routes() -> Router<UserAppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}

/// Create the protected user API router.
///
/// # Routes (all require authentication)
///
/// - `GET /` - List all accounts
/// - `PUT /:id` - Partially update an account
/// - `DELETE /:id` - Remove an account
pub fn protected_user_routes() -> Router<UserAppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", put(update_user))
        .route("/:id", delete(delete_user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{
        FakePasswordHasher, InMemoryUserStore, StaticTokenIssuer,
    };
    use std::sync::Arc;

    #[test]
    fn user_routes_create_routers() {
        let state = UserAppState {
            store: Arc::new(InMemoryUserStore::new()),
            hasher: Arc::new(FakePasswordHasher),
            issuer: Arc::new(StaticTokenIssuer),
        };
        let _: Router<()> = user_routes().with_state(state.clone());
        let _: Router<()> = protected_user_routes().with_state(state);
    }
}
