//! SearchProductsHandler - Query handler for filtered catalog search.

use std::sync::Arc;

use crate::domain::product::{Product, ProductError, ProductFilter};
use crate::ports::ProductCatalog;

/// Query carrying the search criteria.
#[derive(Debug, Clone)]
pub struct SearchProductsQuery {
    pub filter: ProductFilter,
}

/// Handler for catalog search.
///
/// At least one criterion is required; a blanket search should use the
/// list operation instead.
pub struct SearchProductsHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl SearchProductsHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: SearchProductsQuery) -> Result<Vec<Product>, ProductError> {
        if query.filter.is_empty() {
            return Err(ProductError::validation(
                "filter",
                "At least one search criterion is required",
            ));
        }

        let products = self.catalog.search(&query.filter).await?;
        if products.is_empty() {
            return Err(ProductError::none_matched());
        }
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{catalog_product, InMemoryCatalog};
    use crate::domain::foundation::Price;

    #[tokio::test]
    async fn returns_matching_products() {
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![
            catalog_product("Desk Lamp", 1000),
            catalog_product("Floor Lamp", 4000),
            catalog_product("Mug", 500),
        ]));
        let handler = SearchProductsHandler::new(catalog);

        let products = handler
            .handle(SearchProductsQuery {
                filter: ProductFilter {
                    name_contains: Some("lamp".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn rejects_empty_filter() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let handler = SearchProductsHandler::new(catalog);

        let result = handler
            .handle(SearchProductsQuery {
                filter: ProductFilter::default(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn no_match_is_none_matched() {
        let catalog = Arc::new(InMemoryCatalog::with_products(vec![catalog_product(
            "Mug", 500,
        )]));
        let handler = SearchProductsHandler::new(catalog);

        let result = handler
            .handle(SearchProductsQuery {
                filter: ProductFilter {
                    min_price: Some(Price::from_cents(100_000).unwrap()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::NoneMatched)));
    }
}
