//! HTTP handlers for catalog endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::product::{
    CreateProductCommand, CreateProductHandler, DeleteProductCommand, DeleteProductHandler,
    GetProductHandler, GetProductQuery, ListProductsHandler, SearchProductsHandler,
    SearchProductsQuery, UpdateProductCommand, UpdateProductHandler,
};
use crate::domain::foundation::{Price, ProductId, Rating};
use crate::domain::product::{Category, ProductError, ProductFilter, ProductUpdate};
use crate::ports::ProductCatalog;

use super::dto::{
    CreateProductRequest, ErrorResponse, ProductListResponse, ProductResponse,
    SearchProductsParams, UpdateProductRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the catalog routes.
#[derive(Clone)]
pub struct ProductAppState {
    pub catalog: Arc<dyn ProductCatalog>,
}

impl ProductAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_handler(&self) -> CreateProductHandler {
        CreateProductHandler::new(self.catalog.clone())
    }

    pub fn get_handler(&self) -> GetProductHandler {
        GetProductHandler::new(self.catalog.clone())
    }

    pub fn list_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.catalog.clone())
    }

    pub fn search_handler(&self) -> SearchProductsHandler {
        SearchProductsHandler::new(self.catalog.clone())
    }

    pub fn update_handler(&self) -> UpdateProductHandler {
        UpdateProductHandler::new(self.catalog.clone())
    }

    pub fn delete_handler(&self) -> DeleteProductHandler {
        DeleteProductHandler::new(self.catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/products - Create a product
pub async fn create_product(
    State(state): State<ProductAppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ProductApiError> {
    let cmd = CreateProductCommand {
        name: request.name,
        description: request.description,
        image_url: request.image_url,
        category: parse_category(&request.category)?,
        price: parse_price(request.price_cents)?,
        rating: parse_rating(request.rating)?,
        free_delivery: request.free_delivery,
    };

    let product = state.create_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

/// GET /api/products - List the whole catalog
pub async fn list_products(
    State(state): State<ProductAppState>,
) -> Result<impl IntoResponse, ProductApiError> {
    let products = state.list_handler().handle().await?;
    Ok(Json(ProductListResponse::new(products)))
}

/// GET /api/products/search - Search with query parameters
pub async fn search_products(
    State(state): State<ProductAppState>,
    Query(params): Query<SearchProductsParams>,
) -> Result<impl IntoResponse, ProductApiError> {
    let query = SearchProductsQuery {
        filter: params_to_filter(params)?,
    };
    let products = state.search_handler().handle(query).await?;
    Ok(Json(ProductListResponse::new(products)))
}

/// GET /api/products/:id - Fetch one product
pub async fn get_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ProductApiError> {
    let query = GetProductQuery {
        product_id: parse_product_id(&id)?,
    };
    let product = state.get_handler().handle(query).await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// PUT /api/products/:id - Partially update a product
pub async fn update_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ProductApiError> {
    let cmd = UpdateProductCommand {
        product_id: parse_product_id(&id)?,
        update: request_to_update(request)?,
    };
    let product = state.update_handler().handle(cmd).await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// DELETE /api/products/:id - Delete a product
pub async fn delete_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ProductApiError> {
    let cmd = DeleteProductCommand {
        product_id: parse_product_id(&id)?,
    };
    state.delete_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Parsing helpers
// ════════════════════════════════════════════════════════════════════════════════

fn parse_product_id(raw: &str) -> Result<ProductId, ProductApiError> {
    raw.parse()
        .map_err(|_| ProductError::validation("id", "Malformed product ID").into())
}

fn parse_category(raw: &str) -> Result<Category, ProductApiError> {
    raw.parse::<Category>()
        .map_err(|e| ProductError::validation("category", e.to_string()).into())
}

fn parse_price(cents: i64) -> Result<Price, ProductApiError> {
    Price::from_cents(cents)
        .map_err(|e| ProductError::validation("price_cents", e.to_string()).into())
}

fn parse_rating(value: u8) -> Result<Rating, ProductApiError> {
    Rating::try_from_u8(value)
        .map_err(|e| ProductError::validation("rating", e.to_string()).into())
}

fn request_to_update(request: UpdateProductRequest) -> Result<ProductUpdate, ProductApiError> {
    Ok(ProductUpdate {
        name: request.name,
        description: request.description,
        image_url: request.image_url,
        category: request.category.as_deref().map(parse_category).transpose()?,
        price: request.price_cents.map(parse_price).transpose()?,
        rating: request.rating.map(parse_rating).transpose()?,
        free_delivery: request.free_delivery,
    })
}

fn params_to_filter(params: SearchProductsParams) -> Result<ProductFilter, ProductApiError> {
    Ok(ProductFilter {
        category: params.category.as_deref().map(parse_category).transpose()?,
        name_contains: params.name,
        min_price: params.min_price_cents.map(parse_price).transpose()?,
        max_price: params.max_price_cents.map(parse_price).transpose()?,
        min_rating: params.min_rating.map(parse_rating).transpose()?,
        max_rating: params.max_rating.map(parse_rating).transpose()?,
        free_delivery: params.free_delivery,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts product errors to HTTP responses.
pub struct ProductApiError(ProductError);

impl From<ProductError> for ProductApiError {
    fn from(err: ProductError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ProductApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            ProductError::NotFound(_) => (StatusCode::NOT_FOUND, "PRODUCT_NOT_FOUND"),
            ProductError::NoneMatched => (StatusCode::NOT_FOUND, "NO_PRODUCTS_FOUND"),
            ProductError::DuplicateName(_) => (StatusCode::CONFLICT, "DUPLICATE_PRODUCT_NAME"),
            ProductError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            ProductError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{catalog_product, InMemoryCatalog};

    fn test_state() -> ProductAppState {
        ProductAppState {
            catalog: Arc::new(InMemoryCatalog::with_products(vec![catalog_product(
                "Desk Lamp",
                1000,
            )])),
        }
    }

    #[tokio::test]
    async fn list_products_returns_catalog() {
        let result = list_products(State(test_state())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_product_rejects_unknown_category() {
        let request = CreateProductRequest {
            name: "Gizmo".to_string(),
            description: "A gizmo".to_string(),
            image_url: "https://img.example.com/g.png".to_string(),
            category: "toys".to_string(),
            price_cents: 100,
            rating: 3,
            free_delivery: false,
        };

        let result = create_product(State(test_state()), Json(request)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn get_product_rejects_malformed_id() {
        let result = get_product(State(test_state()), Path("not-a-uuid".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn search_requires_a_criterion() {
        let result = search_products(
            State(test_state()),
            Query(SearchProductsParams::default()),
        )
        .await;
        assert!(result.is_err());
    }

    // Error mapping tests

    #[test]
    fn api_error_maps_not_found_to_404() {
        let err = ProductApiError(ProductError::not_found(ProductId::new()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_none_matched_to_404() {
        let err = ProductApiError(ProductError::none_matched());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_duplicate_name_to_409() {
        let err = ProductApiError(ProductError::duplicate_name("Desk Lamp"));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn api_error_maps_validation_to_400() {
        let err = ProductApiError(ProductError::validation("rating", "out of range"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_infrastructure_to_500() {
        let err = ProductApiError(ProductError::infrastructure("boom"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
