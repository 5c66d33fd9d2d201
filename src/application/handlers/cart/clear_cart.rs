//! ClearCartHandler - Command handler for emptying a cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::UserId;
use crate::ports::CartStore;

/// Command to empty the user's cart in one step.
#[derive(Debug, Clone)]
pub struct ClearCartCommand {
    pub user_id: UserId,
}

/// Handler for clearing a cart.
///
/// No price lookups are needed: an empty cart has zero totals by
/// definition.
pub struct ClearCartHandler {
    store: Arc<dyn CartStore>,
}

impl ClearCartHandler {
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ClearCartCommand) -> Result<Cart, CartError> {
        let mut cart = self
            .store
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| CartError::cart_not_found(cmd.user_id.clone()))?;

        cart.clear();
        self.store.save(&cart).await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{test_user_id, InMemoryCartStore};
    use crate::domain::foundation::{CartId, Price, ProductId};
    use std::collections::HashMap;

    #[tokio::test]
    async fn clear_empties_cart_but_keeps_it() {
        let p1 = ProductId::new();
        let mut cart = Cart::open(CartId::new(), test_user_id());
        cart.add_item(p1, 3).unwrap();
        let prices: HashMap<ProductId, Price> =
            [(p1, Price::from_cents(1000).unwrap())].into_iter().collect();
        cart.recompute_totals(&prices);
        let store = Arc::new(InMemoryCartStore::with_cart(cart));

        let handler = ClearCartHandler::new(store.clone());
        let cart = handler
            .handle(ClearCartCommand {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);

        let stored = store.stored(&test_user_id()).unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn clearing_an_already_empty_cart_succeeds() {
        let cart = Cart::open(CartId::new(), test_user_id());
        let store = Arc::new(InMemoryCartStore::with_cart(cart));

        let handler = ClearCartHandler::new(store);
        let cart = handler
            .handle(ClearCartCommand {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn fails_when_user_has_no_cart() {
        let store = Arc::new(InMemoryCartStore::new());
        let handler = ClearCartHandler::new(store);

        let result = handler
            .handle(ClearCartCommand {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result, Err(CartError::CartNotFound(_))));
    }
}
