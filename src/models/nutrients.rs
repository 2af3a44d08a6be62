use serde::{Deserialize, Serialize};

/// The four tracked quantities. Macronutrients are in grams, calories in kcal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Proteins,
    Fats,
    Carbs,
    Calories,
}

impl Nutrient {
    /// Macronutrients, in scoring order.
    pub const MACROS: [Nutrient; 3] = [Nutrient::Proteins, Nutrient::Fats, Nutrient::Carbs];

    /// All nutrients, in portion-sizing order.
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Proteins,
        Nutrient::Fats,
        Nutrient::Carbs,
        Nutrient::Calories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Proteins => "proteins",
            Nutrient::Fats => "fats",
            Nutrient::Carbs => "carbs",
            Nutrient::Calories => "calories",
        }
    }
}

/// A fixed record of one value per nutrient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl Nutrients {
    pub fn new(calories: f64, proteins: f64, fats: f64, carbs: f64) -> Self {
        Self {
            calories,
            proteins,
            fats,
            carbs,
        }
    }

    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Proteins => self.proteins,
            Nutrient::Fats => self.fats,
            Nutrient::Carbs => self.carbs,
            Nutrient::Calories => self.calories,
        }
    }

    /// Build a record by evaluating `f` for every nutrient.
    pub fn from_fn(mut f: impl FnMut(Nutrient) -> f64) -> Self {
        Self {
            calories: f(Nutrient::Calories),
            proteins: f(Nutrient::Proteins),
            fats: f(Nutrient::Fats),
            carbs: f(Nutrient::Carbs),
        }
    }

    /// True when every value is a finite number.
    pub fn is_finite(&self) -> bool {
        Nutrient::ALL.iter().all(|&n| self.get(n).is_finite())
    }
}

/// The user's daily goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTargets {
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl NutrientTargets {
    pub fn new(calories: f64, proteins: f64, fats: f64, carbs: f64) -> Self {
        Self {
            calories,
            proteins,
            fats,
            carbs,
        }
    }

    pub fn as_nutrients(&self) -> Nutrients {
        Nutrients::new(self.calories, self.proteins, self.fats, self.carbs)
    }

    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.as_nutrients().get(nutrient)
    }
}

/// Sum of everything logged for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumedTotals {
    pub total_calories: f64,
    pub total_proteins: f64,
    pub total_fats: f64,
    pub total_carbs: f64,
}

impl ConsumedTotals {
    pub fn new(total_calories: f64, total_proteins: f64, total_fats: f64, total_carbs: f64) -> Self {
        Self {
            total_calories,
            total_proteins,
            total_fats,
            total_carbs,
        }
    }

    pub fn as_nutrients(&self) -> Nutrients {
        Nutrients::new(
            self.total_calories,
            self.total_proteins,
            self.total_fats,
            self.total_carbs,
        )
    }

    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.as_nutrients().get(nutrient)
    }
}
