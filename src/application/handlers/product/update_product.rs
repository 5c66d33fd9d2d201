//! UpdateProductHandler - Command handler for partial product updates.

use std::sync::Arc;

use crate::domain::foundation::ProductId;
use crate::domain::product::{Product, ProductError, ProductUpdate};
use crate::ports::ProductCatalog;

/// Command to apply a partial update to a product.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub product_id: ProductId,
    pub update: ProductUpdate,
}

/// Handler for updating products.
pub struct UpdateProductHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl UpdateProductHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: UpdateProductCommand) -> Result<Product, ProductError> {
        let mut product = self
            .catalog
            .find_by_id(&cmd.product_id)
            .await?
            .ok_or_else(|| ProductError::not_found(cmd.product_id))?;

        // Renames must not collide with another product's name.
        if let Some(new_name) = &cmd.update.name {
            if let Some(existing) = self.catalog.find_by_name(new_name.trim()).await? {
                if existing.id() != &cmd.product_id {
                    return Err(ProductError::duplicate_name(new_name.trim()));
                }
            }
        }

        product.apply_update(cmd.update)?;
        self.catalog.update(&product).await?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{catalog_product, InMemoryCatalog};
    use crate::domain::foundation::Price;

    #[tokio::test]
    async fn updates_provided_fields() {
        let product = catalog_product("Desk Lamp", 1000);
        let id = *product.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![product]));
        let handler = UpdateProductHandler::new(catalog.clone());

        let updated = handler
            .handle(UpdateProductCommand {
                product_id: id,
                update: ProductUpdate {
                    price: Some(Price::from_cents(1250).unwrap()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.price().as_cents(), 1250);
        assert_eq!(catalog.stored(&id).unwrap().price().as_cents(), 1250);
    }

    #[tokio::test]
    async fn fails_when_product_absent() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let handler = UpdateProductHandler::new(catalog);

        let result = handler
            .handle(UpdateProductCommand {
                product_id: ProductId::new(),
                update: ProductUpdate {
                    free_delivery: Some(true),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn rejects_empty_update() {
        let product = catalog_product("Desk Lamp", 1000);
        let id = *product.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![product]));
        let handler = UpdateProductHandler::new(catalog);

        let result = handler
            .handle(UpdateProductCommand {
                product_id: id,
                update: ProductUpdate::default(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn rejects_rename_onto_another_product() {
        let lamp = catalog_product("Desk Lamp", 1000);
        let mug = catalog_product("Mug", 500);
        let mug_id = *mug.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![lamp, mug]));
        let handler = UpdateProductHandler::new(catalog);

        let result = handler
            .handle(UpdateProductCommand {
                product_id: mug_id,
                update: ProductUpdate {
                    name: Some("Desk Lamp".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn allows_rename_to_own_name() {
        let lamp = catalog_product("Desk Lamp", 1000);
        let id = *lamp.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![lamp]));
        let handler = UpdateProductHandler::new(catalog);

        let result = handler
            .handle(UpdateProductCommand {
                product_id: id,
                update: ProductUpdate {
                    name: Some("Desk Lamp".to_string()),
                    free_delivery: Some(true),
                    ..Default::default()
                },
            })
            .await;

        assert!(result.is_ok());
    }
}
