use serde::Serialize;

use crate::models::{Nutrient, NutrientTargets};
use crate::recommender::balance::NutrientBalance;
use crate::recommender::constants::RecommendConfig;

/// Relative urgency of each macronutrient.
///
/// Weights sum to 1 whenever any raw weight is positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Priority {
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl Priority {
    /// Weight for a macronutrient. Calories carry no priority weight.
    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Proteins => self.proteins,
            Nutrient::Fats => self.fats,
            Nutrient::Carbs => self.carbs,
            Nutrient::Calories => 0.0,
        }
    }

    pub fn sum(&self) -> f64 {
        self.proteins + self.fats + self.carbs
    }
}

/// Raw weight for one macronutrient: its relative deficit, floored at
/// `min_priority`. Surplus or a non-positive target gets the floor.
fn raw_weight(
    nutrient: Nutrient,
    targets: &NutrientTargets,
    balance: &NutrientBalance,
    config: &RecommendConfig,
) -> f64 {
    let target = targets.get(nutrient);
    let absolute = balance.absolute.get(nutrient);
    if absolute > 0.0 && target > 0.0 {
        config.min_priority.max(absolute / target)
    } else {
        config.min_priority
    }
}

/// Convert deficits into normalized macronutrient weights.
pub fn calculate_priorities(
    targets: &NutrientTargets,
    balance: &NutrientBalance,
    config: &RecommendConfig,
) -> Priority {
    let raw = Priority {
        proteins: raw_weight(Nutrient::Proteins, targets, balance, config),
        fats: raw_weight(Nutrient::Fats, targets, balance, config),
        carbs: raw_weight(Nutrient::Carbs, targets, balance, config),
    };

    let total = raw.sum();
    if total > 0.0 {
        Priority {
            proteins: raw.proteins / total,
            fats: raw.fats / total,
            carbs: raw.carbs / total,
        }
    } else {
        raw
    }
}
