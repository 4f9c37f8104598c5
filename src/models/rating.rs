use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Fixed rating categories, in the order they are compared
pub const RATING_CATEGORIES: [&str; 5] = ["Story", "Animation", "Sound", "Characters", "Enjoyment"];

/// Number of categories in every rating vector
pub const CATEGORY_COUNT: usize = 5;

/// Upper bound of a single category value
pub const MAX_CATEGORY_VALUE: f64 = 5.0;

/// A per-category rating of one item
///
/// Exactly five values in fixed category order, each in [0, 5] in 0.5 steps.
/// Out-of-range values are rejected here, at the boundary where data enters
/// the engine, so the scoring math never has to re-check them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 5]", into = "[f64; 5]")]
pub struct RatingVector {
    values: [f64; CATEGORY_COUNT],
}

impl RatingVector {
    pub fn new(values: [f64; CATEGORY_COUNT]) -> EngineResult<Self> {
        for (category, value) in RATING_CATEGORIES.iter().zip(values.iter()) {
            if !(0.0..=MAX_CATEGORY_VALUE).contains(value) || (value * 2.0).fract() != 0.0 {
                return Err(EngineError::InvalidInput(format!(
                    "{} rating must be between 0 and 5 in 0.5 steps, got {}",
                    category, value
                )));
            }
        }
        Ok(Self { values })
    }

    /// Category values in fixed category order
    pub fn values(&self) -> &[f64; CATEGORY_COUNT] {
        &self.values
    }
}

impl TryFrom<[f64; CATEGORY_COUNT]> for RatingVector {
    type Error = EngineError;

    fn try_from(values: [f64; CATEGORY_COUNT]) -> EngineResult<Self> {
        Self::new(values)
    }
}

impl From<RatingVector> for [f64; CATEGORY_COUNT] {
    fn from(vector: RatingVector) -> Self {
        vector.values
    }
}

/// A user's rating vector for one item, tagged with its creation time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRating {
    pub item_id: u32,
    pub vector: RatingVector,
    pub created_at: DateTime<Utc>,
}
