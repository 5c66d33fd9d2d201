//! RemoveItemHandler - Command handler for deleting a cart line.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::{ProductId, UserId};
use crate::ports::{price_sheet, CartStore, ProductCatalog};

/// Command to delete the line for a product, whatever its quantity.
#[derive(Debug, Clone)]
pub struct RemoveItemCommand {
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// Handler for removing a line from a cart.
pub struct RemoveItemHandler {
    store: Arc<dyn CartStore>,
    catalog: Arc<dyn ProductCatalog>,
}

impl RemoveItemHandler {
    pub fn new(store: Arc<dyn CartStore>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: RemoveItemCommand) -> Result<Cart, CartError> {
        let mut cart = self
            .store
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| CartError::cart_not_found(cmd.user_id.clone()))?;

        cart.remove_item(&cmd.product_id)
            .map_err(|_| CartError::not_in_cart(cmd.product_id))?;

        let ids: Vec<ProductId> = cart.items().iter().map(|l| *l.product_id()).collect();
        let prices = price_sheet(self.catalog.as_ref(), &ids).await?;
        let orphaned = cart.recompute_totals(&prices);
        if !orphaned.is_empty() {
            tracing::warn!(
                cart_id = %cart.id(),
                orphaned = ?orphaned,
                "pruned cart lines referencing deleted products"
            );
        }

        self.store.save(&cart).await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{
        catalog_product, test_user_id, InMemoryCartStore, InMemoryCatalog,
    };
    use crate::domain::foundation::CartId;

    #[tokio::test]
    async fn remove_deletes_line_and_recomputes_totals() {
        let lamp = catalog_product("Desk Lamp", 1000);
        let mug = catalog_product("Mug", 500);
        let lamp_id = *lamp.id();
        let mug_id = *mug.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![lamp, mug]));

        let mut cart = Cart::open(CartId::new(), test_user_id());
        cart.add_item(lamp_id, 2).unwrap();
        cart.add_item(mug_id, 3).unwrap();
        let prices = price_sheet(catalog.as_ref(), &[lamp_id, mug_id])
            .await
            .unwrap();
        cart.recompute_totals(&prices);
        let store = Arc::new(InMemoryCartStore::with_cart(cart));

        let handler = RemoveItemHandler::new(store, catalog);
        let cart = handler
            .handle(RemoveItemCommand {
                user_id: test_user_id(),
                product_id: lamp_id,
            })
            .await
            .unwrap();

        assert!(cart.line(&lamp_id).is_none());
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().as_cents(), 1500);
    }

    #[tokio::test]
    async fn fails_when_user_has_no_cart() {
        let store = Arc::new(InMemoryCartStore::new());
        let catalog = Arc::new(InMemoryCatalog::new());
        let handler = RemoveItemHandler::new(store, catalog);

        let result = handler
            .handle(RemoveItemCommand {
                user_id: test_user_id(),
                product_id: ProductId::new(),
            })
            .await;

        assert!(matches!(result, Err(CartError::CartNotFound(_))));
    }

    #[tokio::test]
    async fn fails_and_leaves_cart_unchanged_when_line_absent() {
        let lamp = catalog_product("Desk Lamp", 1000);
        let lamp_id = *lamp.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![lamp]));

        let mut cart = Cart::open(CartId::new(), test_user_id());
        cart.add_item(lamp_id, 2).unwrap();
        let prices = price_sheet(catalog.as_ref(), &[lamp_id]).await.unwrap();
        cart.recompute_totals(&prices);
        let store = Arc::new(InMemoryCartStore::with_cart(cart));

        let handler = RemoveItemHandler::new(store.clone(), catalog);
        let result = handler
            .handle(RemoveItemCommand {
                user_id: test_user_id(),
                product_id: ProductId::new(),
            })
            .await;

        assert!(matches!(result, Err(CartError::NotInCart(_))));
        let stored = store.stored(&test_user_id()).unwrap();
        assert_eq!(stored.total_items(), 1);
        assert_eq!(stored.total_price().as_cents(), 2000);
    }
}
