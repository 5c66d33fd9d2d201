//! UpdateUserHandler - Command handler for profile and password changes.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError, UserUpdate};
use crate::ports::{PasswordHasher, UserStore};

/// Command to partially update a user. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Handler for user updates.
pub struct UpdateUserHandler {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserHandler {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, UserError> {
        let update = UserUpdate {
            name: cmd.name,
            email: cmd.email,
        };
        if update.is_empty() && cmd.password.is_none() {
            return Err(UserError::validation("update", "No fields to update"));
        }

        let mut user = self
            .store
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(cmd.user_id.clone()))?;

        // Changing email must not collide with another account
        if let Some(email) = &update.email {
            if let Some(existing) = self.store.find_by_email(email.trim()).await? {
                if existing.id() != user.id() {
                    return Err(UserError::duplicate_email(email.trim().to_lowercase()));
                }
            }
        }

        user.apply_update(update)?;

        if let Some(password) = cmd.password {
            User::validate_password(&password)?;
            user.set_password_hash(self.hasher.hash(&password)?);
        }

        self.store.update(&user).await?;
        Ok(user)
    }
}
