use crate::models::{Nutrient, NutrientTargets, Nutrients};
use crate::recommender::constants::RecommendConfig;

/// Suggested portion in grams that closes the remaining deficit without
/// pushing any nutrient further over target.
///
/// Each nutrient the food contains proposes a candidate mass and the most
/// restrictive one wins. The result is clamped to the configured bounds;
/// a food with no positive nutrient value gets the minimum.
pub fn recommended_mass(
    food: &Nutrients,
    targets: &NutrientTargets,
    absolute_balance: &Nutrients,
    config: &RecommendConfig,
) -> f64 {
    let candidate = Nutrient::ALL
        .into_iter()
        .filter_map(|nutrient| {
            let per_100g = food.get(nutrient);
            if per_100g <= 0.0 {
                return None;
            }

            let balance = absolute_balance.get(nutrient);
            let mass = if balance > 0.0 {
                balance / per_100g * 100.0
            } else if balance < config.surplus_threshold {
                let allowance = targets.get(nutrient) * config.surplus_portion_fraction;
                allowance / per_100g * 100.0
            } else {
                config.max_mass
            };
            Some(mass)
        })
        .reduce(f64::min);

    match candidate {
        Some(mass) => mass.clamp(config.min_mass, config.max_mass),
        None => config.min_mass,
    }
}
