//! GetProductHandler - Query handler for a single product.

use std::sync::Arc;

use crate::domain::foundation::ProductId;
use crate::domain::product::{Product, ProductError};
use crate::ports::ProductCatalog;

/// Query for one product by ID.
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub product_id: ProductId,
}

/// Handler for fetching a product.
pub struct GetProductHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl GetProductHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetProductQuery) -> Result<Product, ProductError> {
        self.catalog
            .find_by_id(&query.product_id)
            .await?
            .ok_or_else(|| ProductError::not_found(query.product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{catalog_product, InMemoryCatalog};

    #[tokio::test]
    async fn returns_product_when_found() {
        let product = catalog_product("Desk Lamp", 1000);
        let id = *product.id();
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![product]));
        let handler = GetProductHandler::new(catalog);

        let found = handler.handle(GetProductQuery { product_id: id }).await.unwrap();
        assert_eq!(found.name(), "Desk Lamp");
    }

    #[tokio::test]
    async fn fails_when_absent() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let handler = GetProductHandler::new(catalog);

        let result = handler
            .handle(GetProductQuery {
                product_id: ProductId::new(),
            })
            .await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }
}
