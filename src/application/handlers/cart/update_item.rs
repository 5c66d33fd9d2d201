//! UpdateItemHandler - Command handler for setting a line's quantity.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::{ProductId, UserId};
use crate::ports::{price_sheet, CartStore, ProductCatalog};

/// Command to set a cart line's quantity to an absolute value.
///
/// Unlike add, the quantity here overwrites. A quantity of zero deletes
/// the line.
#[derive(Debug, Clone)]
pub struct UpdateItemCommand {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Handler for absolute quantity updates.
pub struct UpdateItemHandler {
    store: Arc<dyn CartStore>,
    catalog: Arc<dyn ProductCatalog>,
}

impl UpdateItemHandler {
    pub fn new(store: Arc<dyn CartStore>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: UpdateItemCommand) -> Result<Cart, CartError> {
        let mut cart = self
            .store
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| CartError::cart_not_found(cmd.user_id.clone()))?;

        cart.set_item_quantity(&cmd.product_id, cmd.quantity)
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

    async fn seeded(
        cents: i64,
        quantity: u32,
    ) -> (Arc<InMemoryCartStore>, Arc<InMemoryCatalog>, ProductId) {
        let product = catalog_product("Desk Lamp", cents);
        let product_id = *product.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![product]));

        let mut cart = Cart::open(CartId::new(), test_user_id());
        cart.add_item(product_id, quantity).unwrap();
        let prices = price_sheet(catalog.as_ref(), &[product_id]).await.unwrap();
        cart.recompute_totals(&prices);
        let store = Arc::new(InMemoryCartStore::with_cart(cart));

        (store, catalog, product_id)
    }

    #[tokio::test]
    async fn update_overwrites_quantity_instead_of_adding() {
        let (store, catalog, product_id) = seeded(1000, 5).await;
        let handler = UpdateItemHandler::new(store, catalog);

        let cart = handler
            .handle(UpdateItemCommand {
                user_id: test_user_id(),
                product_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(cart.line(&product_id).unwrap().quantity(), 2);
        assert_eq!(cart.total_price().as_cents(), 2000);
    }

    #[tokio::test]
    async fn update_to_zero_deletes_the_line() {
        let (store, catalog, product_id) = seeded(1000, 5).await;
        let handler = UpdateItemHandler::new(store.clone(), catalog);

        let cart = handler
            .handle(UpdateItemCommand {
                user_id: test_user_id(),
                product_id,
                quantity: 0,
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().as_cents(), 0);
        // The cart itself survives.
        assert!(store.stored(&test_user_id()).is_some());
    }

    #[tokio::test]
    async fn fails_when_user_has_no_cart() {
        let store = Arc::new(InMemoryCartStore::new());
        let catalog = Arc::new(InMemoryCatalog::new());
        let handler = UpdateItemHandler::new(store, catalog);

        let result = handler
            .handle(UpdateItemCommand {
                user_id: test_user_id(),
                product_id: ProductId::new(),
                quantity: 1,
            })
            .await;

        assert!(matches!(result, Err(CartError::CartNotFound(_))));
    }

    #[tokio::test]
    async fn fails_when_product_has_no_line() {
        let (store, catalog, _) = seeded(1000, 5).await;
        let handler = UpdateItemHandler::new(store, catalog);

        let other = ProductId::new();
        let result = handler
            .handle(UpdateItemCommand {
                user_id: test_user_id(),
                product_id: other,
                quantity: 1,
            })
            .await;

        assert!(matches!(result, Err(CartError::NotInCart(id)) if id == other));
    }

    #[tokio::test]
    async fn update_reprices_against_live_catalog() {
        let (store, catalog, product_id) = seeded(1000, 2).await;
        let handler = UpdateItemHandler::new(store, catalog.clone());

        let mut repriced = catalog.stored(&product_id).unwrap();
        repriced
            .apply_update(crate::domain::product::ProductUpdate {
                price: Some(crate::domain::foundation::Price::from_cents(1500).unwrap()),
                ..Default::default()
            })
            .unwrap();
        catalog.insert(&repriced).await.unwrap();

        let cart = handler
            .handle(UpdateItemCommand {
                user_id: test_user_id(),
                product_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(cart.total_price().as_cents(), 3000);
    }
}
