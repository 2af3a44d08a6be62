use serde::Serialize;

use crate::models::FoodItem;

/// A recommended food with its relative match and suggested portion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFood {
    #[serde(flatten)]
    pub food: FoodItem,

    /// Match relative to the best candidate, 0 to 100.
    pub match_score: f64,

    /// Suggested portion in grams, 10 to 500.
    pub recommended_mass: f64,
}

impl ScoredFood {
    pub fn new(food: FoodItem, match_score: f64, recommended_mass: f64) -> Self {
        Self {
            food,
            match_score,
            recommended_mass,
        }
    }
}
