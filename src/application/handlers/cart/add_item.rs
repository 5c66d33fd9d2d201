//! AddItemHandler - Command handler for adding quantity to a cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::{CartId, ProductId, UserId};
use crate::ports::{price_sheet, CartStore, ProductCatalog};

/// Command to add quantity of a product to the user's cart.
#[derive(Debug, Clone)]
pub struct AddItemCommand {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Handler for adding items to a cart.
///
/// Creates the cart lazily on the user's first add. Quantities
/// accumulate into existing lines rather than overwriting them.
pub struct AddItemHandler {
    store: Arc<dyn CartStore>,
    catalog: Arc<dyn ProductCatalog>,
}

impl AddItemHandler {
    pub fn new(store: Arc<dyn CartStore>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: AddItemCommand) -> Result<Cart, CartError> {
        if cmd.quantity == 0 {
            return Err(CartError::validation(
                "quantity",
                "Quantity must be at least 1",
            ));
        }

        // 1. The product must exist before it can enter a cart
        self.catalog
            .find_by_id(&cmd.product_id)
            .await?
            .ok_or_else(|| CartError::product_not_found(cmd.product_id))?;

        // 2. Load or lazily open the cart
        let (mut cart, is_new) = match self.store.find_by_user(&cmd.user_id).await? {
            Some(cart) => (cart, false),
            None => (Cart::open(CartId::new(), cmd.user_id.clone()), true),
        };

        // 3. Mutate, then recompute totals against live prices
        cart.add_item(cmd.product_id, cmd.quantity)?;
        self.refresh_totals(&mut cart).await?;

        // 4. Persist
        if is_new {
            self.store.create(&cart).await?;
        } else {
            self.store.save(&cart).await?;
        }

        Ok(cart)
    }

    async fn refresh_totals(&self, cart: &mut Cart) -> Result<(), CartError> {
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
        Ok(())
    }
}
