//! PostgreSQL implementation of ProductCatalog.
//!
//! Name uniqueness is enforced by a unique index on `lower(name)`;
//! violations surface as `DuplicateProductName`.

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Price, ProductId, Rating, Timestamp};
use crate::domain::product::{Category, Product, ProductFilter};
use crate::ports::ProductCatalog;

/// PostgreSQL implementation of ProductCatalog.
#[derive(Clone)]
pub struct PostgresProductCatalog {
    pool: PgPool,
}

impl PostgresProductCatalog {
    /// Creates a new PostgresProductCatalog.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = "id, name, description, image_url, category, \
     price_cents, rating, free_delivery, created_at, updated_at";

#[async_trait]
impl ProductCatalog for PostgresProductCatalog {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM products WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch product: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_product(row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM products WHERE lower(name) = lower($1)",
            SELECT_COLUMNS
        ))
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch product by name: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_product(row)?)),
            None => Ok(None),
        }
    }

    async fn find_many(&self, ids: &[ProductId]) -> Result<Vec<Product>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query(&format!(
            "SELECT {} FROM products WHERE id = ANY($1)",
            SELECT_COLUMNS
        ))
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch products: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM products ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list products: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM products WHERE 1=1", SELECT_COLUMNS));

        if let Some(category) = filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(needle) = &filter.name_contains {
            builder.push(" AND name ILIKE ");
            builder.push_bind(format!("%{}%", escape_like(needle)));
        }
        if let Some(min) = filter.min_price {
            builder.push(" AND price_cents >= ");
            builder.push_bind(min.as_cents());
        }
        if let Some(max) = filter.max_price {
            builder.push(" AND price_cents <= ");
            builder.push_bind(max.as_cents());
        }
        if let Some(min) = filter.min_rating {
            builder.push(" AND rating >= ");
            builder.push_bind(i16::from(min.value()));
        }
        if let Some(max) = filter.max_rating {
            builder.push(" AND rating <= ");
            builder.push_bind(i16::from(max.value()));
        }
        if let Some(free_delivery) = filter.free_delivery {
            builder.push(" AND free_delivery = ");
            builder.push_bind(free_delivery);
        }
        builder.push(" ORDER BY created_at DESC");

        let rows = builder.build().fetch_all(&self.pool).await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to search products: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn insert(&self, product: &Product) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, description, image_url, category,
                price_cents, rating, free_delivery, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(product.id().as_uuid())
        .bind(product.name())
        .bind(product.description())
        .bind(product.image_url())
        .bind(product.category().as_str())
        .bind(product.price().as_cents())
        .bind(i16::from(product.rating().value()))
        .bind(product.free_delivery())
        .bind(product.created_at().as_datetime())
        .bind(product.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_or_database_error(e, product.name(), "insert"))?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                description = $3,
                image_url = $4,
                category = $5,
                price_cents = $6,
                rating = $7,
                free_delivery = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(product.id().as_uuid())
        .bind(product.name())
        .bind(product.description())
        .bind(product.image_url())
        .bind(product.category().as_str())
        .bind(product.price().as_cents())
        .bind(i16::from(product.rating().value()))
        .bind(product.free_delivery())
        .bind(product.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_or_database_error(e, product.name(), "update"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", product.id()),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete product: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn duplicate_or_database_error(e: sqlx::Error, name: &str, op: &str) -> DomainError {
    if e.as_database_error()
        .map(|d| d.is_unique_violation())
        .unwrap_or(false)
    {
        DomainError::new(
            ErrorCode::DuplicateProductName,
            format!("Product name already exists: {}", name),
        )
    } else {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to {} product: {}", op, e),
        )
    }
}

fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn row_to_product(row: sqlx::postgres::PgRow) -> Result<Product, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let name: String = row.try_get("name").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get name: {}", e),
        )
    })?;

    let description: String = row.try_get("description").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get description: {}", e),
        )
    })?;

    let image_url: String = row.try_get("image_url").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get image_url: {}", e),
        )
    })?;

    let category_str: String = row.try_get("category").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get category: {}", e),
        )
    })?;
    let category: Category = category_str.parse().map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid category: {}", e),
        )
    })?;

    let price_cents: i64 = row.try_get("price_cents").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get price_cents: {}", e),
        )
    })?;

    let rating: i16 = row.try_get("rating").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get rating: {}", e),
        )
    })?;

    let free_delivery: bool = row.try_get("free_delivery").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get free_delivery: {}", e),
        )
    })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    let updated_at: chrono::DateTime<chrono::Utc> = row.try_get("updated_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get updated_at: {}", e),
        )
    })?;

    Ok(Product::reconstitute(
        ProductId::from_uuid(id),
        name,
        description,
        image_url,
        category,
        Price::from_cents(price_cents).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid price_cents: {}", e),
            )
        })?,
        Rating::try_from_u8(rating as u8).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid rating: {}", e))
        })?,
        free_delivery,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
