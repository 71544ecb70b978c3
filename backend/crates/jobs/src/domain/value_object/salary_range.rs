//! Salary Range Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a salary range is not well-formed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryRangeError {
    #[error("Salary bounds must not be negative")]
    Negative,

    #[error("Salary minimum ({min}) must not exceed maximum ({max})")]
    Inverted { min: i64, max: i64 },
}

/// Inclusive salary range attached to a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    min: i64,
    max: i64,
}

impl SalaryRange {
    /// Create a validated salary range
    pub fn new(min: i64, max: i64) -> Result<Self, SalaryRangeError> {
        if min < 0 || max < 0 {
            return Err(SalaryRangeError::Negative);
        }
        if min > max {
            return Err(SalaryRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create from database values (assumed already validated)
    pub fn from_db(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
