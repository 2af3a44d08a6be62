use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged portion of a catalog food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionEntry {
    pub id: u64,
    pub food_id: u64,
    pub date: NaiveDate,
    pub grams: f64,
}

/// A consumption entry joined with its food, nutrients scaled to the portion
/// and rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaryRow {
    pub id: u64,
    pub name: String,
    pub barcode: Option<String>,
    pub date: NaiveDate,
    pub grams: f64,
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}
