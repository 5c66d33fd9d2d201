//! RegisterUserHandler - Command handler for creating an account.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::{PasswordHasher, UserStore};

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Handler for registration.
///
/// Emails are unique across accounts (case-insensitive). The raw
/// password is policy-checked and hashed here; nothing downstream ever
/// sees it.
pub struct RegisterUserHandler {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, UserError> {
        User::validate_password(&cmd.password)?;

        if self.store.find_by_email(cmd.email.trim()).await?.is_some() {
            return Err(UserError::duplicate_email(cmd.email.trim().to_lowercase()));
        }

        let password_hash = self.hasher.hash(&cmd.password)?;
        let user = User::new(
            UserId::new(Uuid::new_v4().to_string())
                .map_err(|e| UserError::from(crate::domain::foundation::DomainError::from(e)))?,
            cmd.name,
            cmd.email,
            password_hash,
        )?;

        self.store.insert(&user).await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{
        registered_user, FakePasswordHasher, InMemoryUserStore,
    };

    fn command(email: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }

    fn handler(store: Arc<InMemoryUserStore>) -> RegisterUserHandler {
        RegisterUserHandler::new(store, Arc::new(FakePasswordHasher))
    }

    #[tokio::test]
    async fn registers_and_stores_hash_not_password() {
        let store = Arc::new(InMemoryUserStore::new());
        let handler = handler(store.clone());

        let user = handler.handle(command("ada@example.com")).await.unwrap();

        assert_eq!(user.email(), "ada@example.com");
        let stored = store.stored(user.id()).unwrap();
        assert_eq!(stored.password_hash(), "hashed:hunter2hunter2");
    }

    #[tokio::test]
    async fn rejects_duplicate_email_ignoring_case() {
        let existing = registered_user("Ada", "ada@example.com", "pw-irrelevant");
        let store = Arc::new(InMemoryUserStore::with_users(vec![existing]));
        let handler = handler(store);

        let result = handler.handle(command("ADA@Example.com")).await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn rejects_short_password_before_touching_the_store() {
        let store = Arc::new(InMemoryUserStore::failing());
        let handler = handler(store);

        let mut cmd = command("ada@example.com");
        cmd.password = "short".to_string();

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(UserError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let store = Arc::new(InMemoryUserStore::new());
        let handler = handler(store);

        let result = handler.handle(command("not-an-email")).await;
        assert!(matches!(result, Err(UserError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let store = Arc::new(InMemoryUserStore::failing());
        let handler = handler(store);

        let result = handler.handle(command("ada@example.com")).await;
        assert!(matches!(result, Err(UserError::Infrastructure(_))));
    }
}
