//! Product catalog port.
//!
//! The catalog owns products; the cart module consumes it for price
//! lookups and the HTTP layer for catalog CRUD.

use std::collections::HashMap;

use crate::domain::foundation::{DomainError, Price, ProductId};
use crate::domain::product::{Product, ProductFilter};
use async_trait::async_trait;

/// Catalog port for product persistence and lookup.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Find a product by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Find a product by exact name (duplicate check).
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;

    /// Fetch several products at once.
    ///
    /// IDs with no matching product are simply absent from the result;
    /// cart recompute treats those as orphaned references.
    async fn find_many(&self, ids: &[ProductId]) -> Result<Vec<Product>, DomainError>;

    /// List the whole catalog.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Search the catalog with a filter.
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError>;

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, product: &Product) -> Result<(), DomainError>;

    /// Update an existing product.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the product doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, product: &Product) -> Result<(), DomainError>;

    /// Delete a product. Carts referencing it are not touched.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the product doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ProductId) -> Result<(), DomainError>;
}

/// Builds a price sheet (product ID -> current unit price) for a set of
/// product references via one live catalog lookup.
///
/// Every cart write path uses this before recomputing totals, so totals
/// always reflect current catalog prices.
pub async fn price_sheet(
    catalog: &dyn ProductCatalog,
    ids: &[ProductId],
) -> Result<HashMap<ProductId, Price>, DomainError> {
    let products = catalog.find_many(ids).await?;
    Ok(products.into_iter().map(|p| (*p.id(), p.price())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn product_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn ProductCatalog) {}
    }
}
