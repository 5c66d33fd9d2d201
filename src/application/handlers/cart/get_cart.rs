//! GetCartHandler - Query handler producing an expanded cart view.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::cart::CartError;
use crate::domain::foundation::{CartId, Price, ProductId, Timestamp, UserId};
use crate::ports::{CartStore, ProductCatalog};

/// Query for the user's cart.
#[derive(Debug, Clone)]
pub struct GetCartQuery {
    pub user_id: UserId,
}

/// A cart line joined with its product's current catalog data.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

/// Read model for a cart: lines expanded with product data, totals
/// derived from current catalog prices.
#[derive(Debug, Clone)]
pub struct CartView {
    pub id: CartId,
    pub user_id: UserId,
    pub items: Vec<CartLineView>,
    pub total_items: u32,
    pub total_price: Price,
    pub updated_at: Timestamp,
}

/// Handler for reading a cart.
///
/// Reads never write: lines whose product was deleted are skipped in the
/// view but left in storage for the next mutation to prune.
pub struct GetCartHandler {
    store: Arc<dyn CartStore>,
    catalog: Arc<dyn ProductCatalog>,
}

impl GetCartHandler {
    pub fn new(store: Arc<dyn CartStore>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, query: GetCartQuery) -> Result<CartView, CartError> {
        let cart = self
            .store
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| CartError::cart_not_found(query.user_id.clone()))?;

        let ids: Vec<ProductId> = cart.items().iter().map(|l| *l.product_id()).collect();
        let products: HashMap<ProductId, _> = self
            .catalog
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|p| (*p.id(), p))
            .collect();

        let mut items = Vec::with_capacity(cart.items().len());
        for line in cart.items() {
            let Some(product) = products.get(line.product_id()) else {
                tracing::debug!(
                    cart_id = %cart.id(),
                    product_id = %line.product_id(),
                    "skipping cart line for deleted product"
                );
                continue;
            };
            items.push(CartLineView {
                product_id: *line.product_id(),
                name: product.name().to_string(),
                image_url: product.image_url().to_string(),
                unit_price: product.price(),
                quantity: line.quantity(),
                line_total: product.price().line_total(line.quantity()),
            });
        }

        let total_price = items
            .iter()
            .map(|i| i.line_total)
            .fold(Price::ZERO, |acc, p| acc.plus(p));

        Ok(CartView {
            id: *cart.id(),
            user_id: cart.user_id().clone(),
            total_items: items.len() as u32,
            total_price,
            items,
            updated_at: *cart.updated_at(),
        })
    }
}
