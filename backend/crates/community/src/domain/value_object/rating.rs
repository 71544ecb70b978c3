//! Rating Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a rating is out of range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Rating must be between {MIN_RATING} and {MAX_RATING} (got {0})")]
pub struct RatingError(pub i16);

/// Minimum allowed rating
pub const MIN_RATING: i16 = 1;

/// Maximum allowed rating
pub const MAX_RATING: i16 = 5;

/// Review rating on a 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Rating(i16);

impl Rating {
    /// Create a validated rating
    pub fn new(value: i16) -> Result<Self, RatingError> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError(value))
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: i16) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for Rating {
    type Error = RatingError;

    fn try_from(value: i16) -> Result<Self, RatingError> {
        Rating::new(value)
    }
}

impl From<Rating> for i16 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
