//! CreateProductHandler - Command handler for adding a catalog product.

use std::sync::Arc;

use crate::domain::foundation::{Price, ProductId, Rating};
use crate::domain::product::{Category, Product, ProductError};
use crate::ports::ProductCatalog;

/// Command to create a new product.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: Category,
    pub price: Price,
    pub rating: Rating,
    pub free_delivery: bool,
}

/// Handler for creating products.
///
/// Product names are unique across the catalog (case-insensitive).
pub struct CreateProductHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl CreateProductHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: CreateProductCommand) -> Result<Product, ProductError> {
        let name = cmd.name.trim();
        if self.catalog.find_by_name(name).await?.is_some() {
            return Err(ProductError::duplicate_name(name));
        }

        let product = Product::new(
            ProductId::new(),
            cmd.name,
            cmd.description,
            cmd.image_url,
            cmd.category,
            cmd.price,
            cmd.rating,
            cmd.free_delivery,
        )?;

        self.catalog.insert(&product).await?;
        Ok(product)
    }
}
