//! LoginUserHandler - Command handler for exchanging credentials for a token.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::user::{User, UserError};
use crate::ports::{PasswordHasher, TokenIssuer, UserStore};

/// Command to log in with email and password.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

/// A successful login: the minted bearer token plus the account.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

/// Handler for login.
///
/// Unknown email and wrong password both fail with the same
/// `InvalidCredentials`, so the endpoint does not reveal which emails
/// are registered.
pub struct LoginUserHandler {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl LoginUserHandler {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
        }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoginOutcome, UserError> {
        let user = self
            .store
            .find_by_email(cmd.email.trim())
            .await?
            .ok_or_else(UserError::invalid_credentials)?;

        if !self.hasher.verify(&cmd.password, user.password_hash())? {
            return Err(UserError::invalid_credentials());
        }

        let token = self
            .issuer
            .issue(&AuthenticatedUser::new(user.id().clone()))
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        Ok(LoginOutcome { token, user })
    }
}
