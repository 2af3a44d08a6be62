mod manager;
mod persistence;

pub use manager::{FUZZY_MATCH_THRESHOLD, FoodMatch, NutritionStore};
pub use persistence::{load_store, save_store, write_diary_csv};
