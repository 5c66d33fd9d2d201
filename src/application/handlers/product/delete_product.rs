//! DeleteProductHandler - Command handler for removing a product.

use std::sync::Arc;

use crate::domain::foundation::ProductId;
use crate::domain::product::ProductError;
use crate::ports::ProductCatalog;

/// Command to delete a product from the catalog.
#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub product_id: ProductId,
}

/// Handler for deleting products.
///
/// Carts holding the product are not touched here; their lines become
/// orphans and are pruned on the cart's next mutation.
pub struct DeleteProductHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl DeleteProductHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: DeleteProductCommand) -> Result<(), ProductError> {
        if self.catalog.find_by_id(&cmd.product_id).await?.is_none() {
            return Err(ProductError::not_found(cmd.product_id));
        }
        self.catalog.delete(&cmd.product_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{catalog_product, InMemoryCatalog};

    #[tokio::test]
    async fn deletes_existing_product() {
        let product = catalog_product("Desk Lamp", 1000);
        let id = *product.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![product]));
        let handler = DeleteProductHandler::new(catalog.clone());

        handler
            .handle(DeleteProductCommand { product_id: id })
            .await
            .unwrap();

        assert!(catalog.stored(&id).is_none());
    }

    #[tokio::test]
    async fn fails_when_product_absent() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let handler = DeleteProductHandler::new(catalog);

        let result = handler
            .handle(DeleteProductCommand {
                product_id: ProductId::new(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }
}
