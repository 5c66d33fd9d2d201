//! DeleteUserHandler - Command handler for removing an account.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::UserError;
use crate::ports::UserStore;

/// Command to delete a user.
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: UserId,
}

/// Handler for deleting accounts.
///
/// The user's cart row is left alone; it simply becomes unreachable
/// once no token can be minted for the user.
pub struct DeleteUserHandler {
    store: Arc<dyn UserStore>,
}

impl DeleteUserHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteUserCommand) -> Result<(), UserError> {
        if self.store.find_by_id(&cmd.user_id).await?.is_none() {
            return Err(UserError::not_found(cmd.user_id));
        }
        self.store.delete(&cmd.user_id).await?;
        Ok(())
    }
}
