//! PostgreSQL implementation of CartStore.
//!
//! Carts are stored one row per user: the line list lives in a JSONB
//! column, the derived totals and the optimistic-concurrency version in
//! plain columns. `save` is a compare-and-swap on the version column.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::cart::{Cart, CartLine};
use crate::domain::foundation::{CartId, DomainError, ErrorCode, Price, Timestamp, UserId};
use crate::ports::CartStore;

/// PostgreSQL implementation of CartStore.
#[derive(Clone)]
pub struct PostgresCartStore {
    pool: PgPool,
}

impl PostgresCartStore {
    /// Creates a new PostgresCartStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStore for PostgresCartStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, items, total_items, total_price_cents,
                   version, created_at, updated_at
            FROM carts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch cart: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_cart(row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, cart: &Cart) -> Result<(), DomainError> {
        let items = serde_json::to_value(cart.items()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize cart items: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO carts (
                id, user_id, items, total_items, total_price_cents,
                version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(cart.id().as_uuid())
        .bind(cart.user_id().as_str())
        .bind(items)
        .bind(cart.total_items() as i32)
        .bind(cart.total_price().as_cents())
        .bind(cart.version())
        .bind(cart.created_at().as_datetime())
        .bind(cart.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map(|d| d.is_unique_violation())
                .unwrap_or(false)
            {
                DomainError::new(
                    ErrorCode::CartConflict,
                    format!("Cart already exists for user: {}", cart.user_id()),
                )
            } else {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert cart: {}", e),
                )
            }
        })?;

        Ok(())
    }

    async fn save(&self, cart: &Cart) -> Result<(), DomainError> {
        let items = serde_json::to_value(cart.items()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize cart items: {}", e),
            )
        })?;

        let result = sqlx::query(
            r#"
            UPDATE carts SET
                items = $3,
                total_items = $4,
                total_price_cents = $5,
                version = version + 1,
                updated_at = $6
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(cart.id().as_uuid())
        .bind(cart.version())
        .bind(items)
        .bind(cart.total_items() as i32)
        .bind(cart.total_price().as_cents())
        .bind(cart.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update cart: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            // Distinguish a lost race from a deleted row.
            let exists: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM carts WHERE id = $1")
                .bind(cart.id().as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to check cart existence: {}", e),
                    )
                })?;

            if exists.0 > 0 {
                return Err(DomainError::new(
                    ErrorCode::CartConflict,
                    format!("Cart was modified concurrently: {}", cart.id()),
                ));
            }
            return Err(DomainError::new(
                ErrorCode::CartNotFound,
                format!("Cart not found: {}", cart.id()),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_cart(row: sqlx::postgres::PgRow) -> Result<Cart, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let user_id: String = row.try_get("user_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get user_id: {}", e),
        )
    })?;

    let items_value: serde_json::Value = row.try_get("items").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get items: {}", e),
        )
    })?;
    let items: Vec<CartLine> = serde_json::from_value(items_value).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to deserialize cart items: {}", e),
        )
    })?;

    let total_items: i32 = row.try_get("total_items").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get total_items: {}", e),
        )
    })?;

    let total_price_cents: i64 = row.try_get("total_price_cents").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get total_price_cents: {}", e),
        )
    })?;

    let version: i64 = row.try_get("version").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get version: {}", e),
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

    Ok(Cart::reconstitute(
        CartId::from_uuid(id),
        UserId::new(user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?,
        items,
        total_items as u32,
        Price::from_cents(total_price_cents).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid total_price_cents: {}", e),
            )
        })?,
        version,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
