//! ListProductsHandler - Query handler for the whole catalog.

use std::sync::Arc;

use crate::domain::product::{Product, ProductError};
use crate::ports::ProductCatalog;

/// Handler for listing all products.
///
/// An empty catalog is reported as an error rather than an empty list,
/// matching the not-found treatment of single lookups.
pub struct ListProductsHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl ListProductsHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.catalog.list().await?;
        if products.is_empty() {
            return Err(ProductError::none_matched());
        }
        Ok(products)
    }
}
