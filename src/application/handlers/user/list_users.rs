//! ListUsersHandler - Query handler for all registered accounts.

use std::sync::Arc;

use crate::domain::user::{User, UserError};
use crate::ports::UserStore;

/// Query for all users.
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery;

/// Handler for listing accounts. An empty registry is an empty list,
/// not an error.
pub struct ListUsersHandler {
    store: Arc<dyn UserStore>,
}

impl ListUsersHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListUsersQuery) -> Result<Vec<User>, UserError> {
        Ok(self.store.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{registered_user, InMemoryUserStore};

    #[tokio::test]
    async fn returns_all_users() {
        let store = Arc::new(InMemoryUserStore::with_users(vec![
            registered_user("Ada", "ada@example.com", "pw-one-long"),
            registered_user("Grace", "grace@example.com", "pw-two-long"),
        ]));
        let handler = ListUsersHandler::new(store);

        let users = handler.handle(ListUsersQuery).await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn empty_registry_is_an_empty_list() {
        let handler = ListUsersHandler::new(Arc::new(InMemoryUserStore::new()));
        let users = handler.handle(ListUsersQuery).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let handler = ListUsersHandler::new(Arc::new(InMemoryUserStore::failing()));
        let result = handler.handle(ListUsersQuery).await;
        assert!(matches!(result, Err(UserError::Infrastructure(_))));
    }
}
