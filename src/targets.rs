//! Daily calorie and macronutrient targets from body parameters.
//!
//! Calories follow the Mifflin-St Jeor equation scaled by an activity
//! multiplier. Macros split calories 30/30/40 between proteins, fats and
//! carbs.

use crate::models::{Gender, NutrientTargets, UserProfile};

/// Energy density in kcal per gram.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Share of daily calories per macronutrient.
pub const PROTEIN_SHARE: f64 = 0.3;
pub const FAT_SHARE: f64 = 0.3;
pub const CARB_SHARE: f64 = 0.4;

/// Macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Basal metabolic rate in kcal/day.
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * profile.age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily calorie need in kcal.
pub fn daily_calories(profile: &UserProfile) -> f64 {
    basal_metabolic_rate(profile) * profile.activity_level
}

/// Split a calorie budget into gram targets, rounded to one decimal.
pub fn macronutrients(calories: f64) -> MacroSplit {
    MacroSplit {
        proteins: round1(calories * PROTEIN_SHARE / KCAL_PER_G_PROTEIN),
        fats: round1(calories * FAT_SHARE / KCAL_PER_G_FAT),
        carbs: round1(calories * CARB_SHARE / KCAL_PER_G_CARB),
    }
}

impl NutrientTargets {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let calories = daily_calories(profile);
        let macros = macronutrients(calories);
        NutrientTargets::new(calories, macros.proteins, macros.fats, macros.carbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    fn profile(gender: Gender) -> UserProfile {
        UserProfile {
            weight: 70.0,
            height: 175.0,
            age: 30,
            gender,
            activity_level: 1.55,
        }
    }

    #[test]
    fn test_bmr_male_and_female() {
        // 700 + 1093.75 - 150 = 1643.75
        assert_float_absolute_eq!(basal_metabolic_rate(&profile(Gender::Male)), 1648.75, 1e-9);
        assert_float_absolute_eq!(
            basal_metabolic_rate(&profile(Gender::Female)),
            1482.75,
            1e-9
        );
    }

    #[test]
    fn test_daily_calories_scales_with_activity() {
        let cal = daily_calories(&profile(Gender::Male));
        assert_float_absolute_eq!(cal, 1648.75 * 1.55, 1e-9);
    }

    #[test]
    fn test_macronutrients_split() {
        let m = macronutrients(2000.0);
        assert_eq!(m.proteins, 150.0);
        assert_eq!(m.fats, 66.7);
        assert_eq!(m.carbs, 200.0);
    }

    #[test]
    fn test_targets_from_profile() {
        let t = NutrientTargets::from_profile(&profile(Gender::Female));
        let cal = 1482.75 * 1.55;
        assert_float_absolute_eq!(t.calories, cal, 1e-9);
        assert_eq!(t.proteins, round1(cal * 0.3 / 4.0));
    }
}
