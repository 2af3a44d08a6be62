use crate::models::{Nutrient, NutrientTargets, Nutrients};
use crate::recommender::balance::NutrientBalance;
use crate::recommender::constants::{MATCH_SCORE_MAX, MATCH_SCORE_MIN, RecommendConfig};
use crate::recommender::priority::Priority;

/// Daily norm used as a denominator, with non-positive norms replaced by
/// the configured floor.
#[inline]
fn norm_or_floor(targets: &NutrientTargets, nutrient: Nutrient, config: &RecommendConfig) -> f64 {
    let norm = targets.get(nutrient);
    if norm <= 0.0 { config.norm_floor } else { norm }
}

/// Share of the daily norm one 100 g serving provides, in percent.
#[inline]
fn contribution(
    food: &Nutrients,
    targets: &NutrientTargets,
    nutrient: Nutrient,
    config: &RecommendConfig,
) -> f64 {
    food.get(nutrient) / norm_or_floor(targets, nutrient, config) * 100.0
}

/// Raw score for one food against the current balance. Higher is better.
///
/// Macros in deficit reward the food by their priority, macros in
/// meaningful surplus penalize it, and a near-zero balance has no effect.
/// Calories reward a little while in deficit and penalize twice as hard
/// otherwise.
pub fn score_food(
    food: &Nutrients,
    targets: &NutrientTargets,
    balance: &NutrientBalance,
    priorities: &Priority,
    config: &RecommendConfig,
) -> f64 {
    let mut score = 0.0;

    for nutrient in Nutrient::MACROS {
        let absolute = balance.absolute.get(nutrient);
        let share = contribution(food, targets, nutrient, config);

        if absolute > 0.0 {
            score += priorities.get(nutrient) * share;
        } else if absolute < config.surplus_threshold {
            score -= share * config.surplus_penalty;
        }
    }

    let calorie_share = contribution(food, targets, Nutrient::Calories, config);
    if balance.is_deficit(Nutrient::Calories) {
        score += calorie_share * config.calorie_reward;
    } else {
        score -= calorie_share * config.calorie_penalty;
    }

    score
}

/// Rescale a raw score against the best raw score into 0..=100.
pub fn match_score(raw: f64, top_raw: f64) -> f64 {
    (raw / top_raw.max(1.0) * 100.0).clamp(MATCH_SCORE_MIN, MATCH_SCORE_MAX)
}
