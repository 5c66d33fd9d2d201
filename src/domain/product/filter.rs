//! Catalog search filter.

use crate::domain::foundation::{Price, Rating};

use super::{Category, Product};

/// Criteria for a catalog search. All set criteria must match.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<Category>,
    /// Case-insensitive substring match on the product name.
    pub name_contains: Option<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub min_rating: Option<Rating>,
    pub max_rating: Option<Rating>,
    pub free_delivery: Option<bool>,
}

impl ProductFilter {
    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.name_contains.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
            && self.max_rating.is_none()
            && self.free_delivery.is_none()
    }

    /// Checks a product against every set criterion.
    ///
    /// Shared by the in-memory fakes and usable as a reference for SQL
    /// adapters.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category() != category {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            if !product
                .name()
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price() < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price() > max {
                return false;
            }
        }
        if let Some(min) = self.min_rating {
            if product.rating() < min {
                return false;
            }
        }
        if let Some(max) = self.max_rating {
            if product.rating() > max {
                return false;
            }
        }
        if let Some(free_delivery) = self.free_delivery {
            if product.free_delivery() != free_delivery {
                return false;
            }
        }
        true
    }
}
