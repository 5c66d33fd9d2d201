//! Rating value object (1 to 5 star scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Product rating: 1 (worst) to 5 (best) whole stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                1,
                5,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_range() {
        for v in 1..=5 {
            assert!(Rating::try_from_u8(v).is_ok());
        }
    }

    #[test]
    fn rejects_zero_and_above_five() {
        assert!(Rating::try_from_u8(0).is_err());
        assert!(Rating::try_from_u8(6).is_err());
    }

    #[test]
    fn orders_by_value() {
        let low = Rating::try_from_u8(2).unwrap();
        let high = Rating::try_from_u8(4).unwrap();
        assert!(low < high);
    }

    #[test]
    fn displays_as_stars() {
        let r = Rating::try_from_u8(3).unwrap();
        assert_eq!(format!("{}", r), "3/5");
    }
}
