//! Product entity.
//!
//! Products are owned by the catalog module. Carts reference them by ID
//! only; deleting a product does not touch carts (orphaned lines are
//! pruned lazily on the next cart recompute).

use crate::domain::foundation::{
    DomainError, Price, ProductId, Rating, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::Category;

/// Maximum length for a product name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    image_url: String,
    category: Category,
    price: Price,
    rating: Rating,
    free_delivery: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Partial update for a product; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Price>,
    pub rating: Option<Rating>,
    pub free_delivery: Option<bool>,
}

impl ProductUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.rating.is_none()
            && self.free_delivery.is_none()
    }
}

impl Product {
    /// Creates a new product, validating every field.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` on empty name/description or a malformed
    ///   image URL
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProductId,
        name: String,
        description: String,
        image_url: String,
        category: Category,
        price: Price,
        rating: Rating,
        free_delivery: bool,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_description(&description)?;
        Self::validate_image_url(&image_url)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name: name.trim().to_string(),
            description,
            image_url: image_url.trim().to_string(),
            category,
            price,
            rating,
            free_delivery,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a product from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProductId,
        name: String,
        description: String,
        image_url: String,
        category: Category,
        price: Price,
        rating: Rating,
        free_delivery: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image_url,
            category,
            price,
            rating,
            free_delivery,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn free_delivery(&self) -> bool {
        self.free_delivery
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial update, validating each provided field.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the update is empty or a provided field
    ///   is invalid
    pub fn apply_update(&mut self, update: ProductUpdate) -> Result<(), DomainError> {
        if update.is_empty() {
            return Err(DomainError::validation(
                "update",
                "No fields provided for update",
            ));
        }

        if let Some(name) = update.name {
            Self::validate_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            Self::validate_description(&description)?;
            self.description = description;
        }
        if let Some(image_url) = update.image_url {
            Self::validate_image_url(&image_url)?;
            self.image_url = image_url.trim().to_string();
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(free_delivery) = update.free_delivery {
            self.free_delivery = free_delivery;
        }

        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("product_name").into());
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "product_name",
                format!("Name must be {} characters or less", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description").into());
        }
        Ok(())
    }

    fn validate_image_url(url: &str) -> Result<(), DomainError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("image_url").into());
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ValidationError::invalid_format(
                "image_url",
                "must be an http or https URL",
            )
            .into());
        }
        Ok(())
    }
}
