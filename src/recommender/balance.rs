use serde::Serialize;

use crate::models::{ConsumedTotals, Nutrient, NutrientTargets, Nutrients};

/// Remaining room per nutrient for the day.
///
/// Positive values are a deficit (room to eat more), negative values a
/// surplus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientBalance {
    /// `target - consumed`.
    pub absolute: Nutrients,

    /// `absolute / target * 100`, or 0 when the target is not positive.
    pub percent: Nutrients,
}

impl NutrientBalance {
    #[inline]
    pub fn is_deficit(&self, nutrient: Nutrient) -> bool {
        self.absolute.get(nutrient) > 0.0
    }
}

/// Compare today's totals against the daily targets.
pub fn calculate_balance(targets: &NutrientTargets, consumed: &ConsumedTotals) -> NutrientBalance {
    let absolute = Nutrients::from_fn(|n| targets.get(n) - consumed.get(n));
    let percent = Nutrients::from_fn(|n| {
        let target = targets.get(n);
        if target > 0.0 {
            absolute.get(n) / target * 100.0
        } else {
            0.0
        }
    });

    NutrientBalance { absolute, percent }
}
