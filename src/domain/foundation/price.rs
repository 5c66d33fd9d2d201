//! Price value object.
//!
//! All monetary amounts are integer cents to avoid floating point drift
//! in cart totals.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Non-negative monetary amount in cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero price.
    pub const ZERO: Price = Price(0);

    /// Creates a price from cents, rejecting negative amounts.
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        if cents < 0 {
            return Err(ValidationError::out_of_range(
                "price",
                0,
                i64::MAX,
                cents,
            ));
        }
        Ok(Self(cents))
    }

    /// Returns the amount in cents.
    pub fn as_cents(&self) -> i64 {
        self.0
    }

    /// Multiplies this unit price by a line quantity.
    ///
    /// Saturates instead of wrapping on overflow; cart totals of that
    /// magnitude are already nonsensical.
    pub fn line_total(&self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Adds another price, saturating on overflow.
    pub fn plus(&self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
