/// Balance below this (in the nutrient's own units) counts as a meaningful surplus.
pub const SURPLUS_THRESHOLD: f64 = -10.0;

/// Score penalty weight for macros already in surplus.
pub const SURPLUS_PENALTY: f64 = 0.75;

/// Score reward weight for calories while in deficit.
pub const CALORIE_REWARD: f64 = 0.1;

/// Score penalty weight for calories once the budget is spent.
pub const CALORIE_PENALTY: f64 = 0.2;

/// Share of the daily target a food may still add to a nutrient in surplus.
pub const SURPLUS_PORTION_FRACTION: f64 = 0.05;

/// Baseline priority so no macronutrient is ever ignored.
pub const MIN_PRIORITY: f64 = 0.1;

/// Replaces non-positive daily norms in scoring denominators.
pub const NORM_FLOOR: f64 = 1.0;

/// Portion bounds in grams.
pub const MIN_MASS: f64 = 10.0;
pub const MAX_MASS: f64 = 500.0;

/// Match score bounds.
pub const MATCH_SCORE_MIN: f64 = 0.0;
pub const MATCH_SCORE_MAX: f64 = 100.0;

/// Number of recommendations returned when the caller does not say.
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Runtime-configurable recommendation weights.
///
/// `Default` reproduces the constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendConfig {
    pub surplus_threshold: f64,
    pub surplus_penalty: f64,
    pub calorie_reward: f64,
    pub calorie_penalty: f64,
    pub surplus_portion_fraction: f64,
    pub min_priority: f64,
    pub norm_floor: f64,
    pub min_mass: f64,
    pub max_mass: f64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            surplus_threshold: SURPLUS_THRESHOLD,
            surplus_penalty: SURPLUS_PENALTY,
            calorie_reward: CALORIE_REWARD,
            calorie_penalty: CALORIE_PENALTY,
            surplus_portion_fraction: SURPLUS_PORTION_FRACTION,
            min_priority: MIN_PRIORITY,
            norm_floor: NORM_FLOOR,
            min_mass: MIN_MASS,
            max_mass: MAX_MASS,
        }
    }
}
