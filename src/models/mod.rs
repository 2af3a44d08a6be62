pub mod diary;
pub mod food;
pub mod nutrients;
pub mod profile;
pub mod recommendation;

pub use diary::{ConsumptionEntry, DiaryRow};
pub use food::{FoodItem, NewFood};
pub use nutrients::{ConsumedTotals, Nutrient, NutrientTargets, Nutrients};
pub use profile::{Gender, UserProfile};
pub use recommendation::ScoredFood;
