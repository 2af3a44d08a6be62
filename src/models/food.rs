use serde::{Deserialize, Serialize};

use crate::models::nutrients::Nutrients;

/// A food in the catalog with nutritional data per 100 g.
///
/// Nutrient values come from upstream sources (manual entry, barcode
/// lookups) and may be missing. Missing values count as zero in arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u64,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    #[serde(default)]
    pub calories: Option<f64>,

    #[serde(default)]
    pub proteins: Option<f64>,

    #[serde(default)]
    pub fats: Option<f64>,

    #[serde(default)]
    pub carbs: Option<f64>,
}

impl FoodItem {
    /// Per-100g nutrients with missing values replaced by 0.
    pub fn nutrients(&self) -> Nutrients {
        Nutrients::new(
            self.calories.unwrap_or(0.0),
            self.proteins.unwrap_or(0.0),
            self.fats.unwrap_or(0.0),
            self.carbs.unwrap_or(0.0),
        )
    }

    /// Whether at least one nutrient value is known and positive.
    pub fn has_nutrient_data(&self) -> bool {
        [self.calories, self.proteins, self.fats, self.carbs]
            .into_iter()
            .flatten()
            .any(|v| v > 0.0)
    }

    /// Nutrients for an arbitrary portion size.
    pub fn nutrients_for_grams(&self, grams: f64) -> Nutrients {
        let per_100g = self.nutrients();
        Nutrients::new(
            per_100g.calories * grams / 100.0,
            per_100g.proteins * grams / 100.0,
            per_100g.fats * grams / 100.0,
            per_100g.carbs * grams / 100.0,
        )
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        let n = self.nutrients();
        format!(
            "#{} {}: {} kcal, P:{} F:{} C:{}",
            self.id, self.name, n.calories, n.proteins, n.fats, n.carbs
        )
    }
}

/// A food record that has not been assigned a catalog id yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub barcode: Option<String>,
    pub calories: Option<f64>,
    pub proteins: Option<f64>,
    pub fats: Option<f64>,
    pub carbs: Option<f64>,
}

impl NewFood {
    pub fn into_item(self, id: u64) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            barcode: self.barcode,
            calories: self.calories,
            proteins: self.proteins,
            fats: self.fats,
            carbs: self.carbs,
        }
    }
}
